//! # curved-trapezoid
//!
//! Geometry core for a "curved trapezoid": two horizontal bases joined by
//! two quadratic Bézier legs, used as a steering or guidance indicator.
//!
//! The crate computes everything a renderer needs and draws nothing itself:
//!
//! - Trapezoid corners from a bounding box, base widths and a top offset
//! - Bézier control points from a position ratio and a lateral offset
//! - A single closed fill contour whose boundary *is* the curved legs, so
//!   the region between a straight leg and its curve is never drawn twice
//!   or left as a stray sliver
//! - Sampled curve points and debug markers for overlays
//!
//! ## Pipeline
//!
//! 1. [`geometry`]: parameters to four corners
//! 2. [`bezier`]: corners and curvature to control points ([`BezierLeg`])
//! 3. [`fill_path`]: legs to a closed [`FillPath`] per [`FillStrategy`]
//! 4. [`shape`]: all of the above in one call, plus the
//!    [`ShapeRenderer`] boundary
//!
//! Every computation is a pure function of its inputs; nothing is cached
//! between calls.

// Foundation
pub mod basics;
pub mod error;
pub mod math;

// Geometry primitives
pub mod bezier;
pub mod bounding_rect;
pub mod curves;
pub mod geometry;
pub mod path_storage;

// Shape assembly
pub mod config;
pub mod fill_path;
pub mod shape;
pub mod steering;

pub use basics::{PointD, RectD, VertexD, VertexSource};
pub use bezier::{compute_control_point, BezierLeg, CurvatureLevel, OffsetScaling, Severity};
pub use config::{ShapeParameters, ShapePreset, TrapezoidLayout};
pub use curves::{sample_curve, sample_point, CurveSamples};
pub use error::{Result, TrapezoidError};
pub use fill_path::{build_fill_path, build_fill_path_with_legs, FillStrategy, LegCurvature};
pub use geometry::{compute_geometry, compute_geometry_in_layout, TrapezoidGeometry};
pub use path_storage::{FillPath, PathSegment};
pub use shape::{Advisory, Corner, CurvedTrapezoid, LegSide, ShapeRenderer};
pub use steering::{SteeringInput, TurnDirection, TurnUrgency, UrgencyBand};
