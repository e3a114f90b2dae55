//! Control-point derivation for the curved legs.
//!
//! A leg's control point is never set directly. It is anchored at
//! `start + (end - start) * position_ratio` on the straight chord and then
//! pushed `curve_offset` pixels along the x axis:
//!
//! ```text
//!   start ●
//!          \
//!     base  ○ ─────── curve_offset ──────▶ ● control
//!            \
//!             ● end
//! ```
//!
//! The solver is a pure function of its four inputs. Callers that derive
//! `curve_offset` from several factors (intensity × height × ratio and the
//! like, see [`OffsetScaling`]) only ever hand over the final product.

use crate::basics::{
    PointD, VertexSource, PATH_CMD_CURVE3, PATH_CMD_MOVE_TO, PATH_CMD_STOP,
};
use crate::curves::{sample_curve, sample_point, CurveSamples};
use crate::error::{require_finite, require_unit_interval, Result, TrapezoidError};
use crate::math::{calc_distance, calc_lateral_offset};

/// Fraction of the chord length beyond which a curve offset is reported as
/// [`Severity::Extreme`].
pub const EXTREME_OFFSET_RATIO: f64 = 0.5;

/// Compute the quadratic control point of a leg.
///
/// Fails with `InvalidParameter` when `position_ratio` is outside `[0, 1]`
/// or any input is non-finite.
pub fn compute_control_point(
    start: PointD,
    end: PointD,
    position_ratio: f64,
    curve_offset: f64,
) -> Result<PointD> {
    for (name, p) in [("start", start), ("end", end)] {
        if let Some(v) = p.non_finite_coordinate() {
            return Err(TrapezoidError::parameter(name, v, "must be finite"));
        }
    }
    require_unit_interval("position_ratio", position_ratio)?;
    require_finite("curve_offset", curve_offset)?;

    let base = start.lerp(end, position_ratio);
    Ok(PointD::new(base.x + curve_offset, base.y))
}

// ============================================================================
// Severity / curvature level
// ============================================================================

/// Non-fatal advisory about how far a curve is bent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    #[default]
    Normal,
    /// `|curve_offset|` exceeds half the chord length. Still valid geometry.
    Extreme,
}

impl Severity {
    /// Classify an offset against the chord it bends.
    pub fn classify(curve_offset: f64, chord_length: f64) -> Severity {
        if curve_offset.abs() > chord_length * EXTREME_OFFSET_RATIO {
            Severity::Extreme
        } else {
            Severity::Normal
        }
    }
}

/// Visual bend category by absolute pixel offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CurvatureLevel {
    Straight,
    Slight,
    Moderate,
    Pronounced,
    Strong,
    Extreme,
}

impl CurvatureLevel {
    pub fn classify(curve_offset: f64) -> CurvatureLevel {
        let a = curve_offset.abs();
        if a == 0.0 {
            CurvatureLevel::Straight
        } else if a < 25.0 {
            CurvatureLevel::Slight
        } else if a < 100.0 {
            CurvatureLevel::Moderate
        } else if a < 200.0 {
            CurvatureLevel::Pronounced
        } else if a < 400.0 {
            CurvatureLevel::Strong
        } else {
            CurvatureLevel::Extreme
        }
    }
}

// ============================================================================
// Offset scaling
// ============================================================================

/// Ways of turning a unitless bend intensity into a pixel offset.
///
/// Every variant computes `intensity × basis × ratio`; only the basis differs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OffsetScaling {
    /// Basis is the trapezoid height.
    TrapezoidHeight,
    /// Basis is the leg's chord length.
    ChordLength,
    /// Basis is a constant number of pixels.
    Fixed(f64),
    /// Basis is the mean of chord length and trapezoid height.
    Hybrid,
}

impl OffsetScaling {
    pub fn resolve(self, intensity: f64, ratio: f64, chord_length: f64, height: f64) -> f64 {
        let basis = match self {
            OffsetScaling::TrapezoidHeight => height,
            OffsetScaling::ChordLength => chord_length,
            OffsetScaling::Fixed(base) => base,
            OffsetScaling::Hybrid => (chord_length + height) / 2.0,
        };
        intensity * basis * ratio
    }
}

impl Default for OffsetScaling {
    fn default() -> Self {
        OffsetScaling::Fixed(100.0)
    }
}

// ============================================================================
// BezierLeg
// ============================================================================

/// One curved side of the trapezoid: a quadratic Bezier from `start` to
/// `end` whose control point is derived from the shape parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierLeg {
    start: PointD,
    end: PointD,
    control: PointD,
    position_ratio: f64,
    curve_offset: f64,
    iter: u8,
}

impl BezierLeg {
    /// Derive a leg. Fails with `DegenerateSegment` when `start == end`,
    /// and with `InvalidParameter` per [`compute_control_point`].
    pub fn new(start: PointD, end: PointD, position_ratio: f64, curve_offset: f64) -> Result<Self> {
        let control = compute_control_point(start, end, position_ratio, curve_offset)?;
        if start == end {
            return Err(TrapezoidError::DegenerateSegment {
                x: start.x,
                y: start.y,
            });
        }
        Ok(Self {
            start,
            end,
            control,
            position_ratio,
            curve_offset,
            iter: 0,
        })
    }

    pub fn start(&self) -> PointD {
        self.start
    }

    pub fn end(&self) -> PointD {
        self.end
    }

    pub fn control(&self) -> PointD {
        self.control
    }

    pub fn position_ratio(&self) -> f64 {
        self.position_ratio
    }

    pub fn curve_offset(&self) -> f64 {
        self.curve_offset
    }

    /// Anchor of the control point on the straight chord.
    pub fn base(&self) -> PointD {
        PointD::new(self.control.x - self.curve_offset, self.control.y)
    }

    /// Length of the straight chord.
    pub fn chord_length(&self) -> f64 {
        calc_distance(self.start, self.end)
    }

    pub fn severity(&self) -> Severity {
        Severity::classify(self.curve_offset, self.chord_length())
    }

    pub fn curvature_level(&self) -> CurvatureLevel {
        CurvatureLevel::classify(self.curve_offset)
    }

    /// The same curve walked from `end` to `start`. The control point is
    /// copied unchanged; the ratio is mirrored.
    pub fn reversed(&self) -> BezierLeg {
        BezierLeg {
            start: self.end,
            end: self.start,
            control: self.control,
            position_ratio: 1.0 - self.position_ratio,
            curve_offset: self.curve_offset,
            iter: 0,
        }
    }

    pub fn point_at(&self, t: f64) -> PointD {
        sample_point(self.start, self.control, self.end, t)
    }

    /// Evenly spaced samples, `n + 1` points.
    pub fn samples(&self, n: u32) -> CurveSamples {
        sample_curve(self.start, self.control, self.end, n)
    }

    /// Signed distance of `p` from the chord, positive on the +x side.
    pub fn lateral_offset_of(&self, p: PointD) -> f64 {
        calc_lateral_offset(self.start, self.end, p)
    }

    /// Sample with the largest distance from the chord: `(point, signed offset)`.
    pub fn max_deviation(&self, n: u32) -> (PointD, f64) {
        let samples = self.samples(n);
        let mut best = (self.start, 0.0_f64);
        for i in 0..=samples.steps() {
            let q = samples.point_at(i);
            let d = self.lateral_offset_of(q);
            if d.abs() > best.1.abs() {
                best = (q, d);
            }
        }
        best
    }
}

impl VertexSource for BezierLeg {
    fn rewind(&mut self, _path_id: u32) {
        self.iter = 0;
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        let (p, cmd) = match self.iter {
            0 => (self.start, PATH_CMD_MOVE_TO),
            1 => (self.control, PATH_CMD_CURVE3),
            2 => (self.end, PATH_CMD_CURVE3),
            _ => return PATH_CMD_STOP,
        };
        *x = p.x;
        *y = p.y;
        self.iter += 1;
        cmd
    }
}

// ============================================================================
// Tests
// ============================================================================
