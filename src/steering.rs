//! Ship steering indicator.
//!
//! Maps helm state (rudder angle, turn intensity, ship speed) onto the shape
//! parameters of a curved trapezoid. The bottom base stays centred on the
//! ship; the top base swings toward the turn and the legs bow against it.
//! Faster ships turn wider, so the same rudder angle bends the legs less.

use crate::config::{ShapeParameters, TrapezoidLayout};
use crate::error::{require_finite, Result, TrapezoidError};
use crate::fill_path::FillStrategy;
use crate::shape::CurvedTrapezoid;

/// Largest rudder deflection either way, in degrees.
pub const MAX_RUDDER_ANGLE: f64 = 30.0;
/// Largest turn intensity.
pub const MAX_TURN_INTENSITY: f64 = 2.0;
/// Top-base shift at full rudder and unit intensity, in pixels.
pub const MAX_TOP_SHIFT: f64 = 150.0;
/// Curve offset at full rudder, unit intensity and reference speed.
pub const CURVE_GAIN: f64 = 50.0;
/// Speed at which the curve offset is not scaled, in knots.
pub const REFERENCE_SPEED: f64 = 10.0;

/// Rudder angles at or below this magnitude count as steering straight.
const STRAIGHT_DEADBAND: f64 = 1.0;
/// Rudder angles above this magnitude count as a sharp turn.
const SHARP_TURN_ANGLE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    Straight,
    /// Rudder to starboard (positive angle).
    Starboard,
    /// Rudder to port (negative angle).
    Port,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnUrgency {
    Gentle,
    Sharp,
}

/// Colour band of the indicator, by rudder deflection as a fraction of
/// full rudder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UrgencyBand {
    /// Below 0.3.
    Low,
    /// Below 0.7.
    Medium,
    High,
}

/// Helm state driving the indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringInput {
    /// Degrees, −30 to +30. Positive is starboard.
    pub rudder_angle: f64,
    /// 0 to 2.
    pub turn_intensity: f64,
    /// Knots, > 0.
    pub ship_speed: f64,
}

impl Default for SteeringInput {
    fn default() -> Self {
        Self {
            rudder_angle: 0.0,
            turn_intensity: 1.0,
            ship_speed: REFERENCE_SPEED,
        }
    }
}

impl SteeringInput {
    pub fn new(rudder_angle: f64, turn_intensity: f64, ship_speed: f64) -> Self {
        Self {
            rudder_angle,
            turn_intensity,
            ship_speed,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_finite("rudder_angle", self.rudder_angle)?;
        if self.rudder_angle.abs() > MAX_RUDDER_ANGLE {
            return Err(TrapezoidError::parameter(
                "rudder_angle",
                self.rudder_angle,
                "must lie in [-30, 30]",
            ));
        }
        require_finite("turn_intensity", self.turn_intensity)?;
        if !(0.0..=MAX_TURN_INTENSITY).contains(&self.turn_intensity) {
            return Err(TrapezoidError::parameter(
                "turn_intensity",
                self.turn_intensity,
                "must lie in [0, 2]",
            ));
        }
        require_finite("ship_speed", self.ship_speed)?;
        if self.ship_speed <= 0.0 {
            return Err(TrapezoidError::parameter(
                "ship_speed",
                self.ship_speed,
                "must be positive",
            ));
        }
        Ok(())
    }

    /// Rudder deflection as a signed fraction of full rudder.
    fn angle_factor(&self) -> f64 {
        self.rudder_angle / MAX_RUDDER_ANGLE
    }

    /// Shape parameters for this helm state.
    ///
    /// The top base moves toward the turn. The legs bend the other way:
    /// starboard rudder gives a negative (leftward) curve offset, port
    /// rudder a positive one.
    pub fn to_parameters(&self) -> Result<ShapeParameters> {
        self.validate()?;
        let factor = self.angle_factor();
        let top_offset = factor * MAX_TOP_SHIFT * self.turn_intensity;
        let magnitude =
            factor.abs() * (REFERENCE_SPEED / self.ship_speed) * self.turn_intensity * CURVE_GAIN;
        let curve_offset = if self.rudder_angle > 0.0 {
            -magnitude
        } else {
            magnitude
        };
        Ok(ShapeParameters::new(top_offset, 0.5, curve_offset))
    }

    /// Build the indicator shape in `layout`.
    pub fn to_shape(
        &self,
        layout: &TrapezoidLayout,
        strategy: FillStrategy,
    ) -> Result<CurvedTrapezoid> {
        CurvedTrapezoid::build(&self.to_parameters()?, layout, strategy)
    }

    pub fn direction(&self) -> TurnDirection {
        if self.rudder_angle.abs() <= STRAIGHT_DEADBAND {
            TurnDirection::Straight
        } else if self.rudder_angle > 0.0 {
            TurnDirection::Starboard
        } else {
            TurnDirection::Port
        }
    }

    pub fn urgency(&self) -> TurnUrgency {
        if self.rudder_angle.abs() > SHARP_TURN_ANGLE {
            TurnUrgency::Sharp
        } else {
            TurnUrgency::Gentle
        }
    }

    pub fn urgency_band(&self) -> UrgencyBand {
        let u = self.angle_factor().abs();
        if u < 0.3 {
            UrgencyBand::Low
        } else if u < 0.7 {
            UrgencyBand::Medium
        } else {
            UrgencyBand::High
        }
    }

    /// Rough turn radius in arbitrary units, `None` when steering straight.
    pub fn turn_radius_estimate(&self) -> Option<f64> {
        match self.direction() {
            TurnDirection::Straight => None,
            _ => Some(self.ship_speed * REFERENCE_SPEED / self.rudder_angle.abs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bezier::Severity;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_neutral_helm_is_straight() {
        let input = SteeringInput::default();
        let p = input.to_parameters().unwrap();
        assert_eq!(p, ShapeParameters::new(0.0, 0.5, 0.0));
        assert_eq!(input.direction(), TurnDirection::Straight);
        assert_eq!(input.turn_radius_estimate(), None);
        assert_eq!(
            p,
            crate::config::ShapePreset::Steering.parameters()
        );
    }

    #[test]
    fn test_starboard_bends_left() {
        let p = SteeringInput::new(15.0, 1.0, 10.0).to_parameters().unwrap();
        assert_abs_diff_eq!(p.top_offset, 75.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.curve_offset, -25.0, epsilon = 1e-12);
        assert_eq!(p.position_ratio, 0.5);
    }

    #[test]
    fn test_port_bends_right() {
        let p = SteeringInput::new(-30.0, 2.0, 5.0).to_parameters().unwrap();
        assert_abs_diff_eq!(p.top_offset, -300.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.curve_offset, 200.0, epsilon = 1e-12);
    }

    #[test]
    fn test_faster_ship_bends_less() {
        let slow = SteeringInput::new(20.0, 1.0, 5.0).to_parameters().unwrap();
        let fast = SteeringInput::new(20.0, 1.0, 20.0).to_parameters().unwrap();
        assert_eq!(slow.top_offset, fast.top_offset);
        assert!(fast.curve_offset.abs() < slow.curve_offset.abs());
        assert_abs_diff_eq!(slow.curve_offset, 4.0 * fast.curve_offset, epsilon = 1e-9);
    }

    #[test]
    fn test_classification() {
        let gentle = SteeringInput::new(6.0, 1.0, 10.0);
        assert_eq!(gentle.direction(), TurnDirection::Starboard);
        assert_eq!(gentle.urgency(), TurnUrgency::Gentle);
        assert_eq!(gentle.urgency_band(), UrgencyBand::Low);

        let medium = SteeringInput::new(-15.0, 1.0, 10.0);
        assert_eq!(medium.direction(), TurnDirection::Port);
        assert_eq!(medium.urgency_band(), UrgencyBand::Medium);

        let sharp = SteeringInput::new(25.0, 1.0, 10.0);
        assert_eq!(sharp.urgency(), TurnUrgency::Sharp);
        assert_eq!(sharp.urgency_band(), UrgencyBand::High);

        // Deadband
        assert_eq!(
            SteeringInput::new(-1.0, 1.0, 10.0).direction(),
            TurnDirection::Straight
        );
    }

    #[test]
    fn test_turn_radius_estimate() {
        let r = SteeringInput::new(-20.0, 1.0, 10.0).turn_radius_estimate();
        assert_eq!(r, Some(5.0));
    }

    #[test]
    fn test_out_of_range_inputs() {
        for input in [
            SteeringInput::new(31.0, 1.0, 10.0),
            SteeringInput::new(0.0, -0.1, 10.0),
            SteeringInput::new(0.0, 2.5, 10.0),
            SteeringInput::new(0.0, 1.0, 0.0),
            SteeringInput::new(f64::NAN, 1.0, 10.0),
        ] {
            assert!(
                matches!(
                    input.to_parameters(),
                    Err(TrapezoidError::InvalidParameter { .. })
                ),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_full_port_rudder_builds() {
        let shape = SteeringInput::new(-30.0, 2.0, 5.0)
            .to_shape(&TrapezoidLayout::default(), FillStrategy::CurvedBoundary)
            .unwrap();
        assert!(shape.fill().is_well_formed());
        assert_eq!(shape.severity(), Severity::Extreme);
        assert!(shape.geometry().top_left.x < shape.geometry().bottom_left.x);
    }
}
