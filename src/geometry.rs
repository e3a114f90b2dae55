//! Trapezoid corner computation.
//!
//! Turns a bounding box, two base widths and the top offset into the four
//! corner points. The bottom base is centred on the bounding box; the top
//! base centre sits `top_offset` pixels to the right of it (left when
//! negative). Screen coordinates: y grows downward.

use crate::basics::{PointD, RectD};
use crate::bounding_rect::bounding_rect_points;
use crate::config::TrapezoidLayout;
use crate::error::{require_finite, Result, TrapezoidError};

/// The four corners of a trapezoid with horizontal bases.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrapezoidGeometry {
    pub top_left: PointD,
    pub top_right: PointD,
    pub bottom_left: PointD,
    pub bottom_right: PointD,
}

impl TrapezoidGeometry {
    /// Build from explicit corners, checking the trapezoid invariants.
    pub fn new(
        top_left: PointD,
        top_right: PointD,
        bottom_left: PointD,
        bottom_right: PointD,
    ) -> Result<Self> {
        let g = Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        };
        g.validate()?;
        Ok(g)
    }

    /// Check: both bases horizontal, top strictly above bottom, both
    /// widths positive, all coordinates finite.
    pub fn validate(&self) -> Result<()> {
        for (name, p) in [
            ("top_left", self.top_left),
            ("top_right", self.top_right),
            ("bottom_left", self.bottom_left),
            ("bottom_right", self.bottom_right),
        ] {
            if let Some(v) = p.non_finite_coordinate() {
                return Err(TrapezoidError::dimension(name, v, "must be finite"));
            }
        }
        if self.top_left.y != self.top_right.y {
            return Err(TrapezoidError::dimension(
                "top_right.y",
                self.top_right.y,
                "top base must be horizontal",
            ));
        }
        if self.bottom_left.y != self.bottom_right.y {
            return Err(TrapezoidError::dimension(
                "bottom_right.y",
                self.bottom_right.y,
                "bottom base must be horizontal",
            ));
        }
        if self.bottom_left.y <= self.top_left.y {
            return Err(TrapezoidError::dimension(
                "height",
                self.height(),
                "top must lie strictly above bottom",
            ));
        }
        if self.top_width() <= 0.0 {
            return Err(TrapezoidError::dimension(
                "top_base_width",
                self.top_width(),
                "must be > 0",
            ));
        }
        if self.bottom_width() <= 0.0 {
            return Err(TrapezoidError::dimension(
                "bottom_base_width",
                self.bottom_width(),
                "must be > 0",
            ));
        }
        Ok(())
    }

    pub fn top_width(&self) -> f64 {
        self.top_right.x - self.top_left.x
    }

    pub fn bottom_width(&self) -> f64 {
        self.bottom_right.x - self.bottom_left.x
    }

    pub fn height(&self) -> f64 {
        self.bottom_left.y - self.top_left.y
    }

    pub fn top_center(&self) -> PointD {
        self.top_left.lerp(self.top_right, 0.5)
    }

    pub fn bottom_center(&self) -> PointD {
        self.bottom_left.lerp(self.bottom_right, 0.5)
    }

    /// Corners in fill traversal order: top-left, top-right, bottom-right,
    /// bottom-left.
    pub fn corners(&self) -> [PointD; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// Axis-aligned box around the four corners.
    pub fn bounding_rect(&self) -> Option<RectD> {
        bounding_rect_points(&self.corners())
    }
}

/// Compute the trapezoid corners for a bounding box.
///
/// The trapezoid height is [`DEFAULT_HEIGHT_FRACTION`](crate::config::DEFAULT_HEIGHT_FRACTION)
/// of `bounding_height`, centred vertically. Use [`compute_geometry_in_layout`]
/// to give the height explicitly.
///
/// Fails with `InvalidDimension` when any size is ≤ 0 or when
/// `top_base_width >= bottom_base_width`.
pub fn compute_geometry(
    bounding_width: f64,
    bounding_height: f64,
    top_base_width: f64,
    bottom_base_width: f64,
    top_offset: f64,
) -> Result<TrapezoidGeometry> {
    let layout = TrapezoidLayout::new(
        bounding_width,
        bounding_height,
        top_base_width,
        bottom_base_width,
    );
    compute_geometry_in_layout(&layout, top_offset)
}

/// Compute the trapezoid corners for an explicit layout.
pub fn compute_geometry_in_layout(
    layout: &TrapezoidLayout,
    top_offset: f64,
) -> Result<TrapezoidGeometry> {
    layout.validate()?;
    require_finite("top_offset", top_offset)?;

    let center_x = layout.bounding_width / 2.0;
    let top_y = (layout.bounding_height - layout.trapezoid_height) / 2.0;
    let bottom_y = top_y + layout.trapezoid_height;

    let top_center_x = center_x + top_offset;
    let half_top = layout.top_base_width / 2.0;
    let half_bottom = layout.bottom_base_width / 2.0;

    TrapezoidGeometry::new(
        PointD::new(top_center_x - half_top, top_y),
        PointD::new(top_center_x + half_top, top_y),
        PointD::new(center_x - half_bottom, bottom_y),
        PointD::new(center_x + half_bottom, bottom_y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_geometry_scenario_a() {
        let g = compute_geometry(700.0, 500.0, 30.0, 500.0, -200.0).unwrap();
        assert_eq!(g.top_left, PointD::new(135.0, 100.0));
        assert_eq!(g.top_right, PointD::new(165.0, 100.0));
        assert_eq!(g.bottom_left, PointD::new(100.0, 400.0));
        assert_eq!(g.bottom_right, PointD::new(600.0, 400.0));
        assert_eq!(g.top_center().x, 150.0);
        assert_eq!(g.bottom_center().x, 350.0);
    }

    #[test]
    fn test_positive_top_offset_moves_right() {
        let g = compute_geometry(700.0, 500.0, 30.0, 500.0, 120.0).unwrap();
        assert_eq!(g.top_center().x, 470.0);
        assert_eq!(g.bottom_center().x, 350.0);
    }

    #[test]
    fn test_geometry_invariants_hold() {
        let g = compute_geometry(400.0, 300.0, 20.0, 200.0, 35.5).unwrap();
        assert_eq!(g.top_left.y, g.top_right.y);
        assert_eq!(g.bottom_left.y, g.bottom_right.y);
        assert!(g.bottom_left.y > g.top_left.y);
        assert!((g.top_width() - 20.0).abs() < 1e-12);
        assert!((g.bottom_width() - 200.0).abs() < 1e-12);
        assert!((g.height() - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_geometry_rejects_non_positive_sizes() {
        for args in [
            (0.0, 500.0, 30.0, 500.0),
            (700.0, -1.0, 30.0, 500.0),
            (700.0, 500.0, 0.0, 500.0),
            (700.0, 500.0, 30.0, -500.0),
        ] {
            let r = compute_geometry(args.0, args.1, args.2, args.3, 0.0);
            assert!(
                matches!(r, Err(TrapezoidError::InvalidDimension { .. })),
                "{:?} -> {:?}",
                args,
                r
            );
        }
    }

    #[test]
    fn test_geometry_rejects_parallelogram() {
        let r = compute_geometry(700.0, 500.0, 500.0, 500.0, 0.0);
        assert!(matches!(r, Err(TrapezoidError::InvalidDimension { .. })));
        let r = compute_geometry(700.0, 500.0, 600.0, 500.0, 0.0);
        assert!(matches!(r, Err(TrapezoidError::InvalidDimension { .. })));
    }

    #[test]
    fn test_geometry_rejects_non_finite_offset() {
        let r = compute_geometry(700.0, 500.0, 30.0, 500.0, f64::NAN);
        assert!(matches!(r, Err(TrapezoidError::InvalidParameter { .. })));
    }

    #[test]
    fn test_explicit_layout_height() {
        let layout = TrapezoidLayout::new(280.0, 200.0, 16.0, 200.0).with_height(120.0);
        let g = compute_geometry_in_layout(&layout, -60.0).unwrap();
        assert_eq!(g.top_left.y, 40.0);
        assert_eq!(g.bottom_left.y, 160.0);
        assert_eq!(g.top_left.x, 72.0);
        assert_eq!(g.top_right.x, 88.0);
    }

    #[test]
    fn test_new_rejects_slanted_base() {
        let r = TrapezoidGeometry::new(
            PointD::new(0.0, 0.0),
            PointD::new(10.0, 1.0),
            PointD::new(-10.0, 50.0),
            PointD::new(20.0, 50.0),
        );
        assert!(r.is_err());
    }

    #[test]
    fn test_new_rejects_inverted() {
        let r = TrapezoidGeometry::new(
            PointD::new(0.0, 50.0),
            PointD::new(10.0, 50.0),
            PointD::new(-10.0, 0.0),
            PointD::new(20.0, 0.0),
        );
        assert!(r.is_err());
    }

    #[test]
    fn test_bounding_rect() {
        let g = compute_geometry(700.0, 500.0, 30.0, 500.0, -200.0).unwrap();
        let r = g.bounding_rect();
        assert_eq!(r, Some(RectD::new(100.0, 100.0, 600.0, 400.0)));
    }

    #[test]
    fn test_non_finite_corner_reports_bad_coordinate() {
        let r = TrapezoidGeometry::new(
            PointD::new(f64::INFINITY, 0.0),
            PointD::new(10.0, 0.0),
            PointD::new(-10.0, 50.0),
            PointD::new(20.0, 50.0),
        );
        assert_eq!(
            r,
            Err(TrapezoidError::InvalidDimension {
                name: "top_left",
                value: f64::INFINITY,
                reason: "must be finite",
            })
        );
    }
}
