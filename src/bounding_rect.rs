//! Bounding rectangle calculation.
//!
//! Computes the axis-aligned bounding box of a vertex source or a point set.

use crate::basics::{is_stop, is_vertex, PointD, RectD, VertexSource};

/// Compute the bounding rectangle of a single path from a vertex source.
///
/// Rewinds the vertex source to `path_id`, iterates all vertices, and
/// returns the axis-aligned bounding box. Control points count as vertices.
/// Returns `None` if no vertices are found.
pub fn bounding_rect_single(vs: &mut dyn VertexSource, path_id: u32) -> Option<RectD> {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut rect: Option<RectD> = None;

    vs.rewind(path_id);
    loop {
        let cmd = vs.vertex(&mut x, &mut y);
        if is_stop(cmd) {
            break;
        }
        if is_vertex(cmd) {
            rect = Some(extend(rect, x, y));
        }
    }
    rect
}

/// Bounding rectangle of a point slice. Returns `None` for an empty slice.
pub fn bounding_rect_points(points: &[PointD]) -> Option<RectD> {
    points
        .iter()
        .fold(None, |rect, p| Some(extend(rect, p.x, p.y)))
}

#[inline]
fn extend(rect: Option<RectD>, x: f64, y: f64) -> RectD {
    match rect {
        None => RectD::new(x, y, x, y),
        Some(mut r) => {
            if x < r.x1 {
                r.x1 = x;
            }
            if y < r.y1 {
                r.y1 = y;
            }
            if x > r.x2 {
                r.x2 = x;
            }
            if y > r.y2 {
                r.y2 = y;
            }
            r
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::{PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP};

    struct Triangle {
        idx: usize,
    }

    impl VertexSource for Triangle {
        fn rewind(&mut self, _path_id: u32) {
            self.idx = 0;
        }

        fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
            let pts = [(10.0, 20.0), (-5.0, 40.0), (30.0, 35.0)];
            if self.idx >= pts.len() {
                return PATH_CMD_STOP;
            }
            *x = pts[self.idx].0;
            *y = pts[self.idx].1;
            self.idx += 1;
            if self.idx == 1 {
                PATH_CMD_MOVE_TO
            } else {
                PATH_CMD_LINE_TO
            }
        }
    }

    #[test]
    fn test_bounding_rect_single() {
        let mut t = Triangle { idx: 0 };
        let r = bounding_rect_single(&mut t, 0).unwrap();
        assert_eq!(r, RectD::new(-5.0, 20.0, 30.0, 40.0));
    }

    #[test]
    fn test_bounding_rect_points() {
        let pts = [
            PointD::new(3.0, 4.0),
            PointD::new(-1.0, 8.0),
            PointD::new(2.0, -6.0),
        ];
        assert_eq!(
            bounding_rect_points(&pts),
            Some(RectD::new(-1.0, -6.0, 3.0, 8.0))
        );
        assert_eq!(bounding_rect_points(&[]), None);
    }
}
