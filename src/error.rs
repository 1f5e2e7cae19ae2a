use thiserror::Error;

/// Errors produced while building, indexing or converting points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("component {component} is not an integer or floating-point number")]
    TypeMismatch { component: &'static str },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("index {index} is out of range for a point with {len} components")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("zero-length vector")]
    ZeroVector,

    #[error("division by zero")]
    DivisionByZero,
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
