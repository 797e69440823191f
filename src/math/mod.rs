pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;

/// Point type. Planar routines read x and y and carry z through untouched.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
