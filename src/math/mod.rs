pub mod basis;
pub mod distance_2d;
pub mod intersect_3d;
pub mod projection;
pub mod spherical;

pub use basis::{catmull_rom_to_bezier, CATMULL_ROM_TO_BEZIER};
pub use distance_2d::point_to_segment_perpendicular;
pub use intersect_3d::ray_sphere_intersect;
pub use projection::project_to_ndc;
pub use spherical::{angle_between, point_on_sphere, spherical_midpoint};

/// 2D point type (normalized device coordinates).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type. Positions on the sphere are vectors from its center.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
