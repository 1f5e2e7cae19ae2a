//! Immutable points for 2D and 3D space.
//!
//! [`Point2D`] and [`Point3D`] hold either integer or float components, never
//! a mix: any float input promotes every component to float.
//!
//! ```
//! use jicgeometry::{DType, Point2D, Scalar};
//!
//! let p1 = Point2D::new(3, 0);
//! let p2 = Point2D::from([0, 4]);
//!
//! assert_eq!(p1.x(), Scalar::Int(3));
//! assert_eq!(p1[0], Scalar::Int(3));
//!
//! assert_eq!((p1 + p2).to_string(), "<Point2D(x=3, y=4, dtype=int)>");
//! assert_eq!((p1 - p2).to_string(), "<Point2D(x=3, y=-4, dtype=int)>");
//! assert_eq!(((p1 + p2) * 2).to_string(), "<Point2D(x=6, y=8, dtype=int)>");
//!
//! // Scalar division is true division and always yields a float point.
//! assert_eq!((p1 / 2).to_string(), "<Point2D(x=1.50, y=0.00, dtype=float)>");
//! assert_eq!((p1 / 2).dtype(), DType::Float);
//!
//! assert_eq!(p1.distance(&p2), 5.0);
//!
//! let p3 = p1 + p2;
//! assert_eq!(p3.unit_vector()?.to_string(), "<Point2D(x=0.60, y=0.80, dtype=float)>");
//! assert_eq!(p3.magnitude(), 5.0);
//! # Ok::<(), jicgeometry::GeometryError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, Result};
pub use geometry::{Point2D, Point3D};
pub use math::{DType, Scalar};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
