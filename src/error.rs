//! Validation errors raised by the geometry core.
//!
//! Every failure is detected before any geometry is produced; nothing is
//! clamped or defaulted silently.

use thiserror::Error;

/// Typed failure returned by every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrapezoidError {
    /// A bounding or base dimension is non-positive, non-finite, or the
    /// top base is not strictly narrower than the bottom base.
    #[error("invalid dimension `{name}`: {value} ({reason})")]
    InvalidDimension {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A shape parameter is outside its domain (e.g. position ratio not in [0, 1]).
    #[error("invalid parameter `{name}`: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A leg's start and end coincide, so it has no chord to curve along.
    #[error("degenerate segment: start ({x}, {y}) equals end")]
    DegenerateSegment { x: f64, y: f64 },

    /// The two legs were asked to curve in opposite horizontal directions.
    #[error("inconsistent curvature: left offset {left} and right offset {right} have opposite signs")]
    InconsistentCurvature { left: f64, right: f64 },
}

pub type Result<T> = std::result::Result<T, TrapezoidError>;

impl TrapezoidError {
    pub(crate) fn dimension(name: &'static str, value: f64, reason: &'static str) -> Self {
        TrapezoidError::InvalidDimension {
            name,
            value,
            reason,
        }
    }

    pub(crate) fn parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        TrapezoidError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Fails with `InvalidDimension` unless `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(TrapezoidError::dimension(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(TrapezoidError::dimension(name, value, "must be > 0"));
    }
    Ok(value)
}

/// Fails with `InvalidParameter` unless `value` is finite.
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TrapezoidError::parameter(name, value, "must be finite"))
    }
}

/// Fails with `InvalidParameter` unless `value` lies in `[0, 1]`.
pub(crate) fn require_unit_interval(name: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(TrapezoidError::parameter(name, value, "must lie in [0, 1]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("w", 2.5), Ok(2.5));
        assert!(matches!(
            require_positive("w", 0.0),
            Err(TrapezoidError::InvalidDimension { name: "w", .. })
        ));
        assert!(matches!(
            require_positive("w", -1.0),
            Err(TrapezoidError::InvalidDimension { .. })
        ));
        assert!(matches!(
            require_positive("w", f64::NAN),
            Err(TrapezoidError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_require_unit_interval() {
        assert_eq!(require_unit_interval("r", 0.0), Ok(0.0));
        assert_eq!(require_unit_interval("r", 1.0), Ok(1.0));
        assert!(require_unit_interval("r", 1.0001).is_err());
        assert!(require_unit_interval("r", -0.0001).is_err());
        // NaN is never contained in a range
        assert!(require_unit_interval("r", f64::NAN).is_err());
    }

    #[test]
    fn test_require_finite() {
        assert_eq!(require_finite("o", -200.0), Ok(-200.0));
        assert!(require_finite("o", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let e = TrapezoidError::parameter("position_ratio", 1.5, "must lie in [0, 1]");
        assert_eq!(
            e.to_string(),
            "invalid parameter `position_ratio`: 1.5 (must lie in [0, 1])"
        );
        let e = TrapezoidError::InconsistentCurvature {
            left: 10.0,
            right: -10.0,
        };
        assert!(e.to_string().contains("opposite signs"));
    }
}
