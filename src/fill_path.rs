//! Fill path construction for the curved trapezoid.
//!
//! The fill outline is always walked in one fixed order:
//!
//! ```text
//!   top_left ──line──▶ top_right
//!       ▲                  │
//!     curve              curve (right leg, top to bottom)
//!  (left leg,              │
//!  bottom to top)          ▼
//!  bottom_left ◀──line── bottom_right
//! ```
//!
//! With both legs bent in the same horizontal direction, every horizontal
//! row of the shape is the corresponding row of the straight trapezoid
//! shifted sideways, so the contour can never cross itself: the bow added
//! on one side is exactly the bow removed on the other. Opposite bends are
//! rejected up front instead of producing an outline whose fill depends on
//! the rasterizer's winding rule.

use log::{debug, trace, warn};

use crate::basics::PointD;
use crate::bezier::{BezierLeg, Severity};
use crate::curves::estimate_steps;
use crate::error::{require_finite, require_unit_interval, Result, TrapezoidError};
use crate::geometry::TrapezoidGeometry;
use crate::path_storage::FillPath;

/// Subdivision limit of the leg separation test. At this depth a band spans
/// about 6e-8 of the trapezoid height; legs still not provably apart there
/// are treated as touching.
const SEPARATION_MAX_DEPTH: u32 = 24;

// ============================================================================
// Strategy
// ============================================================================

/// How the legs enter the fill outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillStrategy {
    /// Legs are native quadratic segments; the bow regions belong to the shape.
    #[default]
    CurvedBoundary,
    /// Straight quadrilateral through the four corners; curvature ignored.
    StraightOnly,
    /// Legs flattened into `segments` straight pieces each. `0` picks a
    /// count from the leg's size.
    PolygonApproximation { segments: u32 },
}

impl FillStrategy {
    pub fn name(self) -> &'static str {
        match self {
            FillStrategy::CurvedBoundary => "curved-boundary",
            FillStrategy::StraightOnly => "straight-only",
            FillStrategy::PolygonApproximation { .. } => "polygon-approximation",
        }
    }

    /// Parse a strategy name; polygon approximation gets automatic segment count.
    pub fn from_name(name: &str) -> Option<FillStrategy> {
        match name {
            "curved-boundary" => Some(FillStrategy::CurvedBoundary),
            "straight-only" => Some(FillStrategy::StraightOnly),
            "polygon-approximation" => Some(FillStrategy::PolygonApproximation { segments: 0 }),
            _ => None,
        }
    }

    /// Returns `true` if the produced path contains quadratic segments.
    pub fn has_curves(self) -> bool {
        matches!(self, FillStrategy::CurvedBoundary)
    }
}

// ============================================================================
// Per-leg curvature
// ============================================================================

/// Curve parameters of a single leg.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegCurvature {
    pub position_ratio: f64,
    pub curve_offset: f64,
}

impl LegCurvature {
    pub fn new(position_ratio: f64, curve_offset: f64) -> Self {
        Self {
            position_ratio,
            curve_offset,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_unit_interval("position_ratio", self.position_ratio)?;
        require_finite("curve_offset", self.curve_offset)?;
        Ok(())
    }
}

/// Fails with `InconsistentCurvature` when the offsets bend in opposite
/// directions. Zero bends nowhere and pairs with either sign.
pub fn check_curvature(left_offset: f64, right_offset: f64) -> Result<()> {
    if (left_offset > 0.0 && right_offset < 0.0) || (left_offset < 0.0 && right_offset > 0.0) {
        return Err(TrapezoidError::InconsistentCurvature {
            left: left_offset,
            right: right_offset,
        });
    }
    Ok(())
}

// ============================================================================
// Builder
// ============================================================================

/// Build the fill path with the same curvature on both legs.
pub fn build_fill_path(
    geometry: &TrapezoidGeometry,
    position_ratio: f64,
    curve_offset: f64,
    strategy: FillStrategy,
) -> Result<FillPath> {
    let curvature = LegCurvature::new(position_ratio, curve_offset);
    build_fill_path_with_legs(geometry, curvature, curvature, strategy)
}

/// Build the fill path with separate curvature per leg.
///
/// Opposite-signed offsets fail with `InconsistentCurvature`. Same-signed
/// but unequal bends are additionally checked for legs crossing each other,
/// which is reported the same way.
pub fn build_fill_path_with_legs(
    geometry: &TrapezoidGeometry,
    left: LegCurvature,
    right: LegCurvature,
    strategy: FillStrategy,
) -> Result<FillPath> {
    let (left_leg, right_leg) = derive_legs(geometry, left, right)?;
    build_fill_path_from_legs(&left_leg, &right_leg, strategy)
}

/// Build the fill path from legs derived elsewhere. The legs' endpoints
/// must form a valid trapezoid: left leg top_left→bottom_left, right leg
/// top_right→bottom_right.
pub fn build_fill_path_from_legs(
    left: &BezierLeg,
    right: &BezierLeg,
    strategy: FillStrategy,
) -> Result<FillPath> {
    TrapezoidGeometry::new(left.start(), right.start(), left.end(), right.end())?;
    check_curvature(left.curve_offset(), right.curve_offset())?;
    if !legs_stay_apart(left, right) {
        return Err(TrapezoidError::InconsistentCurvature {
            left: left.curve_offset(),
            right: right.curve_offset(),
        });
    }
    Ok(assemble(left, right, strategy))
}

/// Derive both legs of a trapezoid, top to bottom.
pub fn derive_legs(
    geometry: &TrapezoidGeometry,
    left: LegCurvature,
    right: LegCurvature,
) -> Result<(BezierLeg, BezierLeg)> {
    trace!(
        "derive_legs: geometry={:?} left={:?} right={:?}",
        geometry,
        left,
        right
    );
    check_curvature(left.curve_offset, right.curve_offset)?;
    left.validate()?;
    right.validate()?;

    let left_leg = BezierLeg::new(
        geometry.top_left,
        geometry.bottom_left,
        left.position_ratio,
        left.curve_offset,
    )?;
    let right_leg = BezierLeg::new(
        geometry.top_right,
        geometry.bottom_right,
        right.position_ratio,
        right.curve_offset,
    )?;
    geometry.validate()?;
    Ok((left_leg, right_leg))
}

fn assemble(left: &BezierLeg, right: &BezierLeg, strategy: FillStrategy) -> FillPath {
    let severity = left.severity().max(right.severity());
    let top_left = left.start();
    let bottom_left = left.end();
    let top_right = right.start();
    let bottom_right = right.end();

    let mut path = FillPath::new(strategy, severity);
    path.move_to(top_left);
    path.line_to(top_right);

    match strategy {
        FillStrategy::CurvedBoundary => {
            path.curve3(right.control(), bottom_right);
            path.line_to(bottom_left);
            // Walking the left leg upward keeps the same control point.
            path.curve3(left.control(), top_left);
        }
        FillStrategy::StraightOnly => {
            path.line_to(bottom_right);
            path.line_to(bottom_left);
            path.line_to(top_left);
        }
        FillStrategy::PolygonApproximation { segments } => {
            let right_steps = leg_steps(right, segments);
            let left_steps = leg_steps(left, segments);
            for p in right.samples(right_steps).skip(1) {
                path.line_to(p);
            }
            path.line_to(bottom_left);
            for p in left.samples(left_steps).rev().skip(1) {
                path.line_to(p);
            }
        }
    }
    path.close_polygon();

    debug!(
        "fill path built: strategy={} vertices={} severity={:?}",
        strategy.name(),
        path.total_vertices(),
        severity
    );
    if severity == Severity::Extreme {
        warn!(
            "extreme curvature: left offset {} over chord {:.1}, right offset {} over chord {:.1}",
            left.curve_offset(),
            left.chord_length(),
            right.curve_offset(),
            right.chord_length()
        );
    }
    path
}

fn leg_steps(leg: &BezierLeg, segments: u32) -> u32 {
    if segments == 0 {
        estimate_steps(leg.start(), leg.control(), leg.end(), 1.0)
    } else {
        segments
    }
}

// ============================================================================
// Leg separation
// ============================================================================

/// Returns `true` if the right leg lies strictly right of the left leg at
/// every height between the bases.
///
/// Both legs span the same height and their `y(t)` is monotone, so the
/// contour is simple exactly when this horizontal gap stays positive.
fn legs_stay_apart(left: &BezierLeg, right: &BezierLeg) -> bool {
    if left.position_ratio() == right.position_ratio() {
        // Equal t means equal height; the gap is itself a quadratic in t.
        let d0 = right.start().x - left.start().x;
        let d1 = right.control().x - left.control().x;
        let d2 = right.end().x - left.end().x;
        if d0 <= 0.0 || d2 <= 0.0 {
            return false;
        }
        let den = d0 - 2.0 * d1 + d2;
        if den > 0.0 {
            let t = (d0 - d1) / den;
            if t > 0.0 && t < 1.0 {
                let mt = 1.0 - t;
                return mt * mt * d0 + 2.0 * mt * t * d1 + t * t * d2 > 0.0;
            }
        }
        return true;
    }
    gap_stays_positive(left, right, 0.0, 1.0, 0)
}

/// Subdivide the height range `[ua, ub]` (fractions of the trapezoid
/// height) until each band is proven clear by convex-hull bounds or a
/// sample shows the legs touching.
fn gap_stays_positive(left: &BezierLeg, right: &BezierLeg, ua: f64, ub: f64, depth: u32) -> bool {
    let (_, left_max) = leg_x_bounds(left, ua, ub);
    let (right_min, _) = leg_x_bounds(right, ua, ub);
    if left_max < right_min {
        return true;
    }
    let um = 0.5 * (ua + ub);
    let xl = left.point_at(leg_param_at_height(left, um)).x;
    let xr = right.point_at(leg_param_at_height(right, um)).x;
    if xl >= xr || depth >= SEPARATION_MAX_DEPTH {
        return false;
    }
    gap_stays_positive(left, right, ua, um, depth + 1)
        && gap_stays_positive(left, right, um, ub, depth + 1)
}

/// Curve parameter at which a leg has descended the fraction `u` of its
/// height: the root in `[0, 1]` of `(1 - 2r)t² + 2rt = u`.
fn leg_param_at_height(leg: &BezierLeg, u: f64) -> f64 {
    if u <= 0.0 {
        return 0.0;
    }
    if u >= 1.0 {
        return 1.0;
    }
    let r = leg.position_ratio();
    let s = (r * r + (1.0 - 2.0 * r) * u).max(0.0).sqrt();
    (u / (r + s)).min(1.0)
}

/// Horizontal extent of the leg between height fractions `ua` and `ub`,
/// bounded by the control polygon of that piece of the curve.
fn leg_x_bounds(leg: &BezierLeg, ua: f64, ub: f64) -> (f64, f64) {
    let ta = leg_param_at_height(leg, ua);
    let tb = leg_param_at_height(leg, ub);
    let (s, c, e) = (leg.start().x, leg.control().x, leg.end().x);
    let xa = leg.point_at(ta).x;
    let xb = leg.point_at(tb).x;
    // Control point of the sub-curve on [ta, tb]
    let xc = (1.0 - ta) * (1.0 - tb) * s + ((1.0 - ta) * tb + ta * (1.0 - tb)) * c + ta * tb * e;
    (xa.min(xb).min(xc), xa.max(xb).max(xc))
}

/// The four corners and both control points, for debug overlays.
pub fn debug_points(left: &BezierLeg, right: &BezierLeg) -> [PointD; 6] {
    [
        left.start(),
        right.start(),
        right.end(),
        left.end(),
        left.control(),
        right.control(),
    ]
}

// ============================================================================
// Tests
// ============================================================================
