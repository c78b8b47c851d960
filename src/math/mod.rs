pub mod point_2d;
pub mod scalar;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Affine 2x3 transformation matrix (rotation/scale/shear + translation).
pub type Transform2 = nalgebra::Matrix2x3<f64>;

/// Default geometric tolerance for floating-point comparisons.
///
/// Every comparison-sensitive operation takes an explicit tolerance
/// parameter; this constant is the value to pass when no finer control
/// is needed.
pub const TOLERANCE: f64 = 1e-6;
