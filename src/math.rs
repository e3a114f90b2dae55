//! Geometric math utilities.
//!
//! Distances, lateral offsets from a chord, segment crossing and polygon
//! area/simplicity tests over [`PointD`].

use crate::basics::PointD;

// ============================================================================
// Constants
// ============================================================================

/// Coinciding points maximal distance (epsilon).
pub const VERTEX_DIST_EPSILON: f64 = 1e-14;

// ============================================================================
// Lateral offset
// ============================================================================

/// Signed perpendicular distance of `p` from the infinite line through
/// `start`→`end`, measured along the normal whose x component is positive.
///
/// A positive result means `p` lies on the +x side of the chord. For a
/// horizontal chord the normal points toward +y. Degenerate chords return
/// the plain distance to `start`.
#[inline]
pub fn calc_lateral_offset(start: PointD, end: PointD, p: PointD) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let d = (dx * dx + dy * dy).sqrt();
    if d < VERTEX_DIST_EPSILON {
        return calc_distance(start, p);
    }
    // (dy, -dx) has x component dy; flip it when that is negative.
    let (nx, ny) = if dy > 0.0 || (dy == 0.0 && dx < 0.0) {
        (dy, -dx)
    } else {
        (-dy, dx)
    };
    ((p.x - start.x) * nx + (p.y - start.y) * ny) / d
}

// ============================================================================
// Distance calculations
// ============================================================================

/// Euclidean distance between two points.
#[inline]
pub fn calc_distance(a: PointD, b: PointD) -> f64 {
    calc_sq_distance(a, b).sqrt()
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn calc_sq_distance(a: PointD, b: PointD) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

// ============================================================================
// Intersection
// ============================================================================

/// Quick check whether segments p1→p2 and p3→p4 properly cross
/// (touching endpoints excluded).
#[inline]
pub fn intersection_exists(p1: PointD, p2: PointD, p3: PointD, p4: PointD) -> bool {
    let dx1 = p2.x - p1.x;
    let dy1 = p2.y - p1.y;
    let dx2 = p4.x - p3.x;
    let dy2 = p4.y - p3.y;
    ((p3.x - p2.x) * dy1 - (p3.y - p2.y) * dx1 < 0.0)
        != ((p4.x - p2.x) * dy1 - (p4.y - p2.y) * dx1 < 0.0)
        && ((p1.x - p4.x) * dy2 - (p1.y - p4.y) * dx2 < 0.0)
            != ((p2.x - p4.x) * dy2 - (p2.y - p4.y) * dx2 < 0.0)
}

// ============================================================================
// Polygons
// ============================================================================

/// Signed area of a polygon. Positive for counter-clockwise order in a
/// y-up frame (clockwise on a y-down screen).
pub fn calc_polygon_area(vertices: &[PointD]) -> f64 {
    if vertices.is_empty() {
        return 0.0;
    }
    let mut sum = 0.0;
    let mut x = vertices[0].x;
    let mut y = vertices[0].y;
    let xs = x;
    let ys = y;

    for v in &vertices[1..] {
        sum += x * v.y - y * v.x;
        x = v.x;
        y = v.y;
    }
    (sum + x * ys - y * xs) * 0.5
}

/// Returns `true` if no two non-adjacent edges of the closed polygon cross.
///
/// A trailing vertex equal to the first one is treated as the explicit
/// close and ignored. Polygons with fewer than four edges are always simple.
pub fn is_simple_polygon(vertices: &[PointD]) -> bool {
    let mut n = vertices.len();
    if n > 1 && vertices[0] == vertices[n - 1] {
        n -= 1;
    }
    if n < 4 {
        return true;
    }
    for i in 0..n {
        let a1 = vertices[i];
        let a2 = vertices[(i + 1) % n];
        // Edges i and j are adjacent when j == i + 1 or (i == 0, j == n - 1).
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let b1 = vertices[j];
            let b2 = vertices[(j + 1) % n];
            if intersection_exists(a1, a2, b1, b2) {
                return false;
            }
        }
    }
    true
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> PointD {
        PointD::new(x, y)
    }

    #[test]
    fn test_lateral_offset_positive_x_side() {
        // Downward chord (screen coordinates, top to bottom)
        let d = calc_lateral_offset(p(0.0, 0.0), p(0.0, 100.0), p(7.0, 50.0));
        assert!((d - 7.0).abs() < 1e-12);
        // Same chord walked upward: side does not depend on direction
        let d = calc_lateral_offset(p(0.0, 100.0), p(0.0, 0.0), p(7.0, 50.0));
        assert!((d - 7.0).abs() < 1e-12);
        let d = calc_lateral_offset(p(0.0, 0.0), p(0.0, 100.0), p(-3.0, 10.0));
        assert!((d + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_lateral_offset_slanted() {
        let start = p(0.0, 0.0);
        let end = p(100.0, 100.0);
        let d = calc_lateral_offset(start, end, p(60.0, 40.0));
        assert!(d > 0.0);
        assert!((d - 20.0 / 2.0_f64.sqrt()).abs() < 1e-9);
        assert!(calc_lateral_offset(start, end, p(50.0, 50.0)).abs() < 1e-12);
    }

    #[test]
    fn test_calc_distance() {
        assert!((calc_distance(p(0.0, 0.0), p(3.0, 4.0)) - 5.0).abs() < 1e-10);
        assert!((calc_sq_distance(p(0.0, 0.0), p(3.0, 4.0)) - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_intersection_exists() {
        assert!(intersection_exists(
            p(0.0, 0.0),
            p(10.0, 10.0),
            p(10.0, 0.0),
            p(0.0, 10.0)
        ));
        assert!(!intersection_exists(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(0.0, 5.0),
            p(10.0, 5.0)
        ));
    }

    #[test]
    fn test_calc_polygon_area() {
        let square = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)];
        assert!((calc_polygon_area(&square) - 100.0).abs() < 1e-10);
        let mut rev = square;
        rev.reverse();
        assert!((calc_polygon_area(&rev) + 100.0).abs() < 1e-10);
        assert_eq!(calc_polygon_area(&[]), 0.0);
    }

    #[test]
    fn test_is_simple_polygon() {
        let square = [p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)];
        assert!(is_simple_polygon(&square));

        let closed = [
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(10.0, 10.0),
            p(0.0, 10.0),
            p(0.0, 0.0),
        ];
        assert!(is_simple_polygon(&closed));

        // Bow-tie: the two "legs" cross each other
        let bowtie = [p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0), p(10.0, 10.0)];
        assert!(!is_simple_polygon(&bowtie));
    }
}
