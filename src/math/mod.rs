pub mod components;
pub mod scalar;

pub use scalar::{DType, Scalar};

/// 2D point type used for interop with linear-algebra code.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type used for interop with linear-algebra code.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Digits after the decimal point when displaying float points.
pub const REPR_PRECISION: usize = 2;

/// Returns `true` if `a` and `b` differ by less than [`TOLERANCE`].
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}
