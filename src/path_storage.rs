//! Fill path storage.
//!
//! A [`FillPath`] stores its outline as a flat `Vec<VertexD>` of path
//! commands, the same layout a rasterizer consumes, and exposes it both as a
//! [`VertexSource`] and as typed [`PathSegment`]s. Paths are only assembled
//! by the fill builder, so every stored path is a single contour that starts
//! with one `move_to` and ends with an explicit close.

use crate::basics::{
    is_close, is_curve3, is_end_poly, is_line_to, is_move_to, PointD, RectD, VertexD,
    VertexSource, PATH_CMD_CURVE3, PATH_CMD_END_POLY, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO,
    PATH_CMD_STOP, PATH_FLAGS_CLOSE,
};
use crate::bezier::Severity;
use crate::bounding_rect::bounding_rect_single;
use crate::curves::sample_curve;
use crate::fill_path::FillStrategy;
use crate::math::{calc_polygon_area, is_simple_polygon};

/// One drawing step of a fill path. The start point is the previous
/// segment's end (or the path start).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    LineTo(PointD),
    QuadTo { control: PointD, to: PointD },
}

impl PathSegment {
    pub fn end_point(&self) -> PointD {
        match *self {
            PathSegment::LineTo(p) => p,
            PathSegment::QuadTo { to, .. } => to,
        }
    }

    pub fn is_curve(&self) -> bool {
        matches!(self, PathSegment::QuadTo { .. })
    }
}

/// Closed outline of the shaded trapezoid body.
#[derive(Debug, Clone, PartialEq)]
pub struct FillPath {
    vertices: Vec<VertexD>,
    iterator: usize,
    strategy: FillStrategy,
    severity: Severity,
}

impl FillPath {
    pub(crate) fn new(strategy: FillStrategy, severity: Severity) -> Self {
        Self {
            vertices: Vec::new(),
            iterator: 0,
            strategy,
            severity,
        }
    }

    // ---------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------

    pub(crate) fn move_to(&mut self, p: PointD) {
        self.vertices.push(VertexD::new(p.x, p.y, PATH_CMD_MOVE_TO));
    }

    pub(crate) fn line_to(&mut self, p: PointD) {
        self.vertices.push(VertexD::new(p.x, p.y, PATH_CMD_LINE_TO));
    }

    pub(crate) fn curve3(&mut self, control: PointD, to: PointD) {
        self.vertices
            .push(VertexD::new(control.x, control.y, PATH_CMD_CURVE3));
        self.vertices.push(VertexD::new(to.x, to.y, PATH_CMD_CURVE3));
    }

    pub(crate) fn close_polygon(&mut self) {
        self.vertices
            .push(VertexD::new(0.0, 0.0, PATH_CMD_END_POLY | PATH_FLAGS_CLOSE));
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    pub fn strategy(&self) -> FillStrategy {
        self.strategy
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Human-readable warning when the curvature is extreme.
    pub fn advisory(&self) -> Option<String> {
        match self.severity {
            Severity::Normal => None,
            Severity::Extreme => Some(
                "curve offset exceeds half the leg length; the shape may look distorted"
                    .to_string(),
            ),
        }
    }

    /// Raw vertex commands.
    pub fn vertices(&self) -> &[VertexD] {
        &self.vertices
    }

    pub fn total_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Point of the initial `move_to`.
    pub fn start_point(&self) -> Option<PointD> {
        self.vertices
            .first()
            .filter(|v| is_move_to(v.cmd))
            .map(|v| PointD::new(v.x, v.y))
    }

    /// End point of the last drawing segment.
    pub fn end_point(&self) -> Option<PointD> {
        self.segments().last().map(PathSegment::end_point)
    }

    /// Decode the vertex commands into typed segments.
    pub fn segments(&self) -> Vec<PathSegment> {
        let mut out = Vec::new();
        let mut i = 1;
        while i < self.vertices.len() {
            let v = self.vertices[i];
            if is_line_to(v.cmd) {
                out.push(PathSegment::LineTo(PointD::new(v.x, v.y)));
                i += 1;
            } else if is_curve3(v.cmd) && i + 1 < self.vertices.len() {
                let to = self.vertices[i + 1];
                out.push(PathSegment::QuadTo {
                    control: PointD::new(v.x, v.y),
                    to: PointD::new(to.x, to.y),
                });
                i += 2;
            } else {
                break;
            }
        }
        out
    }

    /// Returns `true` if the last command closes the contour and the last
    /// segment ends exactly on the start point.
    pub fn is_closed(&self) -> bool {
        let closed_cmd = self.vertices.last().is_some_and(|v| is_close(v.cmd));
        closed_cmd && self.start_point().is_some() && self.start_point() == self.end_point()
    }

    /// Returns `true` for exactly one `move_to` at the front, complete
    /// curve pairs, no commands after the close, and an explicit closure.
    pub fn is_well_formed(&self) -> bool {
        if self.start_point().is_none() {
            return false;
        }
        let mut i = 1;
        let n = self.vertices.len();
        while i < n {
            let cmd = self.vertices[i].cmd;
            if is_line_to(cmd) {
                i += 1;
            } else if is_curve3(cmd) {
                if i + 1 >= n || !is_curve3(self.vertices[i + 1].cmd) {
                    return false;
                }
                i += 2;
            } else if is_end_poly(cmd) {
                if i != n - 1 {
                    return false;
                }
                i += 1;
            } else {
                return false;
            }
        }
        self.is_closed()
    }

    // ---------------------------------------------------------------
    // Derived geometry
    // ---------------------------------------------------------------

    /// Polygon approximation: curves are sampled with `steps` segments
    /// each, lines are kept. The first point is repeated at the end.
    pub fn flatten(&self, steps: u32) -> Vec<PointD> {
        let Some(mut current) = self.start_point() else {
            return Vec::new();
        };
        let mut out = vec![current];
        for seg in self.segments() {
            match seg {
                PathSegment::LineTo(p) => out.push(p),
                PathSegment::QuadTo { control, to } => {
                    out.extend(sample_curve(current, control, to, steps.max(1)).skip(1));
                }
            }
            current = seg.end_point();
        }
        out
    }

    /// Signed area of the flattened outline. Positive when the contour runs
    /// clockwise on a y-down screen.
    pub fn signed_area(&self, steps: u32) -> f64 {
        calc_polygon_area(&self.flatten(steps))
    }

    /// Returns `true` if the flattened outline does not cross itself.
    pub fn is_simple(&self, steps: u32) -> bool {
        is_simple_polygon(&self.flatten(steps))
    }

    /// Box around every stored vertex, control points included.
    pub fn bounding_rect(&self) -> Option<RectD> {
        let mut copy = self.clone();
        bounding_rect_single(&mut copy, 0)
    }
}

impl VertexSource for FillPath {
    fn rewind(&mut self, _path_id: u32) {
        self.iterator = 0;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        if self.iterator >= self.vertices.len() {
            return PATH_CMD_STOP;
        }
        let v = &self.vertices[self.iterator];
        *x = v.x;
        *y = v.y;
        self.iterator += 1;
        v.cmd
    }
}
