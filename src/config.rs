//! Shape parameters, layout configuration and named presets.
//!
//! [`ShapeParameters`] holds the three scalars that fully determine the
//! curve geometry. [`TrapezoidLayout`] holds everything size-related. The
//! two never overlap: changing the layout moves the corners but the curve
//! parameters keep their meaning.
//!
//! Both are plain `Copy` values. A presentation layer keeps one "last known"
//! instance of each and passes them into the core on every redraw.

use crate::error::{require_finite, require_positive, require_unit_interval, Result, TrapezoidError};

/// Trapezoid height as a fraction of the bounding height when the caller
/// does not give one explicitly (300 px in a 500 px tall canvas).
pub const DEFAULT_HEIGHT_FRACTION: f64 = 0.6;

// ============================================================================
// ShapeParameters
// ============================================================================

/// The minimal parameterization of the curved trapezoid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeParameters {
    /// Horizontal displacement of the top base's centre from the bottom
    /// base's centre, in pixels. Positive moves the top base toward +x.
    pub top_offset: f64,
    /// Fraction along each leg's chord where the control point is anchored
    /// (0 = top end, 1 = bottom end).
    pub position_ratio: f64,
    /// Horizontal displacement of both control points from their anchor, in
    /// pixels. Positive bends the legs toward +x.
    pub curve_offset: f64,
}

impl ShapeParameters {
    pub fn new(top_offset: f64, position_ratio: f64, curve_offset: f64) -> Self {
        Self {
            top_offset,
            position_ratio,
            curve_offset,
        }
    }

    /// Check every field against its domain.
    pub fn validate(&self) -> Result<()> {
        require_finite("top_offset", self.top_offset)?;
        require_unit_interval("position_ratio", self.position_ratio)?;
        require_finite("curve_offset", self.curve_offset)?;
        Ok(())
    }
}

impl Default for ShapeParameters {
    fn default() -> Self {
        ShapePreset::Core.parameters()
    }
}

// ============================================================================
// TrapezoidLayout
// ============================================================================

/// Size configuration: bounding box and base widths.
///
/// The trapezoid is centred horizontally on the bounding box (bottom base)
/// and vertically by its own height.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrapezoidLayout {
    pub bounding_width: f64,
    pub bounding_height: f64,
    pub trapezoid_height: f64,
    pub top_base_width: f64,
    pub bottom_base_width: f64,
}

impl TrapezoidLayout {
    /// Layout with the default height fraction of the bounding height.
    pub fn new(
        bounding_width: f64,
        bounding_height: f64,
        top_base_width: f64,
        bottom_base_width: f64,
    ) -> Self {
        Self {
            bounding_width,
            bounding_height,
            trapezoid_height: bounding_height * DEFAULT_HEIGHT_FRACTION,
            top_base_width,
            bottom_base_width,
        }
    }

    /// Replace the trapezoid height.
    pub fn with_height(mut self, trapezoid_height: f64) -> Self {
        self.trapezoid_height = trapezoid_height;
        self
    }

    /// Check every dimension.
    pub fn validate(&self) -> Result<()> {
        require_positive("bounding_width", self.bounding_width)?;
        require_positive("bounding_height", self.bounding_height)?;
        require_positive("trapezoid_height", self.trapezoid_height)?;
        require_positive("top_base_width", self.top_base_width)?;
        require_positive("bottom_base_width", self.bottom_base_width)?;
        if self.trapezoid_height > self.bounding_height {
            return Err(TrapezoidError::dimension(
                "trapezoid_height",
                self.trapezoid_height,
                "must not exceed bounding_height",
            ));
        }
        if self.top_base_width >= self.bottom_base_width {
            return Err(TrapezoidError::dimension(
                "top_base_width",
                self.top_base_width,
                "must be narrower than bottom_base_width",
            ));
        }
        Ok(())
    }
}

impl Default for TrapezoidLayout {
    fn default() -> Self {
        Self {
            bounding_width: 700.0,
            bounding_height: 500.0,
            trapezoid_height: 300.0,
            top_base_width: 30.0,
            bottom_base_width: 500.0,
        }
    }
}

// ============================================================================
// Presets
// ============================================================================

/// Named parameter sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapePreset {
    /// Strong left shift with a pronounced rightward bend.
    Core,
    /// Same shift, bend of 72 px (intensity 0.6 × height 300 × ratio 0.4).
    Gentle,
    /// Same shift, straight legs.
    Straight,
    /// Neutral steering indicator: centred top base, straight legs.
    Steering,
}

impl ShapePreset {
    pub const ALL: [ShapePreset; 4] = [
        ShapePreset::Core,
        ShapePreset::Gentle,
        ShapePreset::Straight,
        ShapePreset::Steering,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapePreset::Core => "core",
            ShapePreset::Gentle => "gentle",
            ShapePreset::Straight => "straight",
            ShapePreset::Steering => "steering",
        }
    }

    pub fn from_name(name: &str) -> Option<ShapePreset> {
        ShapePreset::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn parameters(self) -> ShapeParameters {
        match self {
            ShapePreset::Core => ShapeParameters::new(-200.0, 0.5, 200.0),
            ShapePreset::Gentle => ShapeParameters::new(-200.0, 0.5, 72.0),
            ShapePreset::Straight => ShapeParameters::new(-200.0, 0.5, 0.0),
            ShapePreset::Steering => ShapeParameters::new(0.0, 0.5, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_are_valid() {
        let p = ShapeParameters::default();
        assert_eq!(p, ShapeParameters::new(-200.0, 0.5, 200.0));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_parameters_reject_bad_ratio() {
        let p = ShapeParameters::new(0.0, 1.2, 10.0);
        assert!(matches!(
            p.validate(),
            Err(TrapezoidError::InvalidParameter {
                name: "position_ratio",
                ..
            })
        ));
    }

    #[test]
    fn test_parameters_reject_non_finite() {
        assert!(ShapeParameters::new(f64::NAN, 0.5, 0.0).validate().is_err());
        assert!(ShapeParameters::new(0.0, 0.5, f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_layout_default_height_fraction() {
        let layout = TrapezoidLayout::new(700.0, 500.0, 30.0, 500.0);
        assert_eq!(layout, TrapezoidLayout::default());
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_layout_rejects_wide_top() {
        let layout = TrapezoidLayout::new(700.0, 500.0, 500.0, 500.0);
        assert!(matches!(
            layout.validate(),
            Err(TrapezoidError::InvalidDimension {
                name: "top_base_width",
                ..
            })
        ));
    }

    #[test]
    fn test_layout_rejects_tall_trapezoid() {
        let layout = TrapezoidLayout::default().with_height(501.0);
        assert!(layout.validate().is_err());
        let layout = TrapezoidLayout::default().with_height(0.0);
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_preset_names_round_trip() {
        for preset in ShapePreset::ALL {
            assert_eq!(ShapePreset::from_name(preset.name()), Some(preset));
            assert!(preset.parameters().validate().is_ok());
        }
        assert_eq!(ShapePreset::from_name("unknown"), None);
    }
}
