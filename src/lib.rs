//! Geodesic closed splines on a sphere and grid-based distance fields.
//!
//! The two halves are independent: [`spline::Spline`] turns an editable ring
//! of control points into a tessellated closed curve lying on a sphere, and
//! [`distance_field::DistanceField`] turns an occupancy raster (for instance
//! one produced by [`raster::rasterize_path`]) into an inverted distance map.

pub mod distance_field;
pub mod error;
pub mod math;
pub mod raster;
pub mod spline;

pub use distance_field::DistanceField;
pub use error::{AuroraError, Result};
pub use spline::{Click, ClickButton, EditOutcome, Selection, Spline, SplineParams};
