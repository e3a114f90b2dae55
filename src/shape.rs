//! One-call shape assembly and the renderer boundary.
//!
//! [`CurvedTrapezoid::build`] runs the whole pipeline (corners, legs, fill
//! path) from a parameter set and a layout. The result is plain data; a
//! presentation layer draws it by implementing [`ShapeRenderer`] and calling
//! [`CurvedTrapezoid::render`].

use std::fmt;

use log::debug;

use crate::basics::PointD;
use crate::bezier::{BezierLeg, CurvatureLevel, Severity};
use crate::config::{ShapeParameters, TrapezoidLayout};
use crate::error::Result;
use crate::fill_path::{
    build_fill_path_from_legs, debug_points, derive_legs, FillStrategy, LegCurvature,
};
use crate::geometry::{compute_geometry_in_layout, TrapezoidGeometry};
use crate::path_storage::FillPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegSide {
    Left,
    Right,
}

impl LegSide {
    pub fn name(self) -> &'static str {
        match self {
            LegSide::Left => "left",
            LegSide::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// Non-fatal warnings about a built shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    /// The leg's offset is more than half its chord length.
    ExtremeCurvature {
        side: LegSide,
        curve_offset: f64,
        chord_length: f64,
    },
    /// The leg's control point lies outside the layout's bounding box.
    ControlPointOutOfBounds { side: LegSide, control: PointD },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Advisory::ExtremeCurvature {
                side,
                curve_offset,
                chord_length,
            } => write!(
                f,
                "{} leg: offset {:.1} px exceeds half of its {:.1} px length",
                side.name(),
                curve_offset,
                chord_length
            ),
            Advisory::ControlPointOutOfBounds { side, control } => write!(
                f,
                "{} leg: control point ({:.1}, {:.1}) lies outside the drawing area",
                side.name(),
                control.x,
                control.y
            ),
        }
    }
}

// ============================================================================
// Renderer boundary
// ============================================================================

/// Sink for a built shape. Implemented by the presentation layer; the core
/// never calls a drawing API itself.
///
/// [`CurvedTrapezoid::render`] calls `fill_path` first, then `stroke_leg`
/// for the left and right legs, then the debug markers.
pub trait ShapeRenderer {
    fn fill_path(&mut self, path: &FillPath);

    fn stroke_leg(&mut self, side: LegSide, leg: &BezierLeg);

    fn corner_marker(&mut self, _corner: Corner, _at: PointD) {}

    fn control_marker(&mut self, _side: LegSide, _at: PointD) {}
}

// ============================================================================
// CurvedTrapezoid
// ============================================================================

/// A fully computed curved trapezoid.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvedTrapezoid {
    parameters: ShapeParameters,
    layout: TrapezoidLayout,
    geometry: TrapezoidGeometry,
    left: BezierLeg,
    right: BezierLeg,
    fill: FillPath,
}

impl CurvedTrapezoid {
    /// Validate inputs and compute corners, legs and fill path.
    pub fn build(
        parameters: &ShapeParameters,
        layout: &TrapezoidLayout,
        strategy: FillStrategy,
    ) -> Result<Self> {
        parameters.validate()?;
        let geometry = compute_geometry_in_layout(layout, parameters.top_offset)?;
        let curvature = LegCurvature::new(parameters.position_ratio, parameters.curve_offset);
        let (left, right) = derive_legs(&geometry, curvature, curvature)?;
        let fill = build_fill_path_from_legs(&left, &right, strategy)?;
        debug!(
            "curved trapezoid: top_offset={} position_ratio={} curve_offset={} strategy={}",
            parameters.top_offset,
            parameters.position_ratio,
            parameters.curve_offset,
            strategy.name()
        );
        Ok(Self {
            parameters: *parameters,
            layout: *layout,
            geometry,
            left,
            right,
            fill,
        })
    }

    pub fn parameters(&self) -> &ShapeParameters {
        &self.parameters
    }

    pub fn layout(&self) -> &TrapezoidLayout {
        &self.layout
    }

    pub fn geometry(&self) -> &TrapezoidGeometry {
        &self.geometry
    }

    pub fn left_leg(&self) -> &BezierLeg {
        &self.left
    }

    pub fn right_leg(&self) -> &BezierLeg {
        &self.right
    }

    pub fn fill(&self) -> &FillPath {
        &self.fill
    }

    /// Left and right control points.
    pub fn control_points(&self) -> [PointD; 2] {
        [self.left.control(), self.right.control()]
    }

    /// Corners in traversal order (top-left, top-right, bottom-right,
    /// bottom-left), then the left and right control points.
    pub fn debug_points(&self) -> [PointD; 6] {
        debug_points(&self.left, &self.right)
    }

    pub fn severity(&self) -> Severity {
        self.fill.severity()
    }

    pub fn curvature_level(&self) -> CurvatureLevel {
        CurvatureLevel::classify(self.parameters.curve_offset)
    }

    /// Sampled leg outlines for overlays: `(left, right)`, `n + 1` points each.
    pub fn debug_samples(&self, n: u32) -> (Vec<PointD>, Vec<PointD>) {
        (
            self.left.samples(n).collect(),
            self.right.samples(n).collect(),
        )
    }

    /// All warnings that apply to this shape, left leg first.
    pub fn advisories(&self) -> Vec<Advisory> {
        let bounds = crate::basics::RectD::new(
            0.0,
            0.0,
            self.layout.bounding_width,
            self.layout.bounding_height,
        );
        let mut out = Vec::new();
        for (side, leg) in [(LegSide::Left, &self.left), (LegSide::Right, &self.right)] {
            if leg.severity() == Severity::Extreme {
                out.push(Advisory::ExtremeCurvature {
                    side,
                    curve_offset: leg.curve_offset(),
                    chord_length: leg.chord_length(),
                });
            }
            let c = leg.control();
            if !bounds.hit_test(c.x, c.y) {
                out.push(Advisory::ControlPointOutOfBounds { side, control: c });
            }
        }
        out
    }

    /// Hand the shape to a renderer.
    pub fn render<R: ShapeRenderer + ?Sized>(&self, renderer: &mut R) {
        renderer.fill_path(&self.fill);
        renderer.stroke_leg(LegSide::Left, &self.left);
        renderer.stroke_leg(LegSide::Right, &self.right);
        for (corner, at) in [
            (Corner::TopLeft, self.geometry.top_left),
            (Corner::TopRight, self.geometry.top_right),
            (Corner::BottomRight, self.geometry.bottom_right),
            (Corner::BottomLeft, self.geometry.bottom_left),
        ] {
            renderer.corner_marker(corner, at);
        }
        renderer.control_marker(LegSide::Left, self.left.control());
        renderer.control_marker(LegSide::Right, self.right.control());
    }
}
