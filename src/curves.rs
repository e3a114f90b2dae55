//! Quadratic Bezier evaluation and uniform sampling.
//!
//! `sample_point` evaluates `(1-t)²·start + 2(1-t)t·control + t²·end`.
//! [`CurveSamples`] walks the same curve at `t = i/n` for `i = 0..=n`; it is
//! a plain value, so cloning or rewinding it replays the exact same points.

use crate::basics::{
    uround, PointD, VertexSource, PATH_CMD_LINE_TO, PATH_CMD_MOVE_TO, PATH_CMD_STOP,
};
use crate::math::calc_distance;

/// Lower bound for [`estimate_steps`].
pub const CURVE_MIN_STEPS: u32 = 4;
/// Upper bound for [`estimate_steps`]. The offset is unbounded, so the
/// control polygon can be arbitrarily long.
pub const CURVE_MAX_STEPS: u32 = 64;

/// Evaluate the quadratic Bezier at `t`.
///
/// `t = 0` returns `start` and `t = 1` returns `end` exactly. Values outside
/// `[0, 1]` extrapolate the polynomial.
#[inline]
pub fn sample_point(start: PointD, control: PointD, end: PointD, t: f64) -> PointD {
    let mt = 1.0 - t;
    let a = mt * mt;
    let b = 2.0 * mt * t;
    let c = t * t;
    PointD::new(
        a * start.x + b * control.x + c * end.x,
        a * start.y + b * control.y + c * end.y,
    )
}

/// Sample the curve at `n + 1` evenly spaced parameters.
///
/// `n = 0` yields only `start`.
pub fn sample_curve(start: PointD, control: PointD, end: PointD, n: u32) -> CurveSamples {
    CurveSamples::new(start, control, end, n)
}

/// Number of straight segments that keeps a flattened curve visually smooth
/// at the given scale: a quarter of the control polygon length, clamped to
/// [`CURVE_MIN_STEPS`]..=[`CURVE_MAX_STEPS`].
pub fn estimate_steps(start: PointD, control: PointD, end: PointD, scale: f64) -> u32 {
    let len = calc_distance(start, control) + calc_distance(control, end);
    let steps = len * 0.25 * scale;
    if !steps.is_finite() {
        return CURVE_MAX_STEPS;
    }
    uround(steps).clamp(CURVE_MIN_STEPS, CURVE_MAX_STEPS)
}

// ============================================================================
// CurveSamples
// ============================================================================

/// Finite, restartable sequence of points along a quadratic Bezier.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSamples {
    start: PointD,
    control: PointD,
    end: PointD,
    steps: u32,
    front: u32,
    // One past the last index still to be yielded from the back.
    back: u32,
}

impl CurveSamples {
    pub fn new(start: PointD, control: PointD, end: PointD, steps: u32) -> Self {
        Self {
            start,
            control,
            end,
            steps,
            front: 0,
            back: steps + 1,
        }
    }

    /// Number of segments (one less than the number of points).
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Parameter value of sample `i`.
    #[inline]
    pub fn t_at(&self, i: u32) -> f64 {
        if self.steps == 0 {
            0.0
        } else {
            i as f64 / self.steps as f64
        }
    }

    /// Point at sample index `i`.
    pub fn point_at(&self, i: u32) -> PointD {
        if i == 0 {
            return self.start;
        }
        if i == self.steps {
            return self.end;
        }
        sample_point(self.start, self.control, self.end, self.t_at(i))
    }

    /// Restart from the first sample.
    pub fn reset(&mut self) {
        self.front = 0;
        self.back = self.steps + 1;
    }
}

impl Iterator for CurveSamples {
    type Item = PointD;

    fn next(&mut self) -> Option<PointD> {
        if self.front >= self.back {
            return None;
        }
        let p = self.point_at(self.front);
        self.front += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.back - self.front) as usize;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for CurveSamples {
    fn next_back(&mut self) -> Option<PointD> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.point_at(self.back))
    }
}

impl ExactSizeIterator for CurveSamples {}

impl VertexSource for CurveSamples {
    fn rewind(&mut self, _path_id: u32) {
        self.reset();
    }

    fn vertex(&mut self, x: &mut f64, y: &mut f64) -> u32 {
        let first = self.front == 0;
        match self.next() {
            Some(p) => {
                *x = p.x;
                *y = p.y;
                if first {
                    PATH_CMD_MOVE_TO
                } else {
                    PATH_CMD_LINE_TO
                }
            }
            None => PATH_CMD_STOP,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
