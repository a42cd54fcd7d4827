pub mod normal;

pub use normal::{centroid, distance_to_plane, face_normal};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Maximum distance a face vertex may sit off the plane of the face's first
/// three vertices.
pub const PLANARITY_TOLERANCE: f64 = 1e-9;
