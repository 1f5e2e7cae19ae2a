use std::any::Any;
use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use crate::error::{GeometryError, Result};
use crate::math::components;
use crate::math::{DType, Point3, Scalar, Vector3};

const LABELS: [&str; 3] = ["x", "y", "z"];

/// A point (or vector) in 3D space with a uniform integer or float dtype.
///
/// ```
/// use jicgeometry::Point3D;
///
/// let a = Point3D::new(6, 0, 8);
/// let b = Point3D::from([3, 0, 4]);
/// assert_eq!(a.distance(&b), 5.0);
/// assert_eq!(Point3D::new(5.9, 8.2, 9.5).as_type("int")?, Point3D::new(6, 8, 10));
/// # Ok::<(), jicgeometry::GeometryError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    components: [Scalar; 3],
}

impl Point3D {
    /// Number of components.
    pub const ARITY: usize = 3;

    /// Creates a point from separate `x`, `y`, `z` values.
    ///
    /// If any value is a float, all three are stored as floats.
    #[must_use]
    pub fn new(x: impl Into<Scalar>, y: impl Into<Scalar>, z: impl Into<Scalar>) -> Self {
        Self::from_array([x.into(), y.into(), z.into()])
    }

    /// Creates a point from an `[x, y, z]` sequence.
    #[must_use]
    pub fn from_array<T: Into<Scalar>>(components: [T; 3]) -> Self {
        Self {
            components: components::unify(components.map(Into::into)),
        }
    }

    /// Creates a point from a slice that must hold exactly three components.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if the slice length is not 3.
    pub fn try_from_slice(components: &[Scalar]) -> Result<Self> {
        components::from_slice(components).map(|components| Self { components })
    }

    /// Creates a point from dynamically typed `x`, `y`, `z` arguments.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if an argument is missing or
    /// surplus, and [`GeometryError::TypeMismatch`] if one is not numeric.
    pub fn try_from_args(args: &[&dyn Any]) -> Result<Self> {
        components::from_args(args, LABELS).map(|components| Self { components })
    }

    /// Returns the x component.
    #[must_use]
    pub fn x(&self) -> Scalar {
        self.components[0]
    }

    /// Returns the y component.
    #[must_use]
    pub fn y(&self) -> Scalar {
        self.components[1]
    }

    /// Returns the z component.
    #[must_use]
    pub fn z(&self) -> Scalar {
        self.components[2]
    }

    /// Returns the shared representation of the components.
    #[must_use]
    pub fn dtype(&self) -> DType {
        components::dtype_of(&self.components)
    }

    /// Returns the component at `index` (0 = x, 1 = y, 2 = z).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] for any other index.
    pub fn get(&self, index: usize) -> Result<Scalar> {
        components::get(&self.components, index)
    }

    /// Returns the number of components, always 3.
    #[must_use]
    #[allow(clippy::len_without_is_empty, clippy::unused_self)]
    pub fn len(&self) -> usize {
        Self::ARITY
    }

    /// Iterates over the components in `x`, `y`, `z` order.
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.components.iter()
    }

    /// Returns the components as a tuple in `x`, `y`, `z` order.
    #[must_use]
    pub fn as_tuple(&self) -> (Scalar, Scalar, Scalar) {
        let [x, y, z] = self.components;
        (x, y, z)
    }

    /// Returns the components as an array.
    #[must_use]
    pub fn to_array(&self) -> [Scalar; 3] {
        self.components
    }

    /// Returns the components as plain floats.
    #[must_use]
    pub fn to_f64_array(&self) -> [f64; 3] {
        components::to_f64_array(self.components)
    }

    /// Returns the Euclidean length when treating the point as a vector.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        components::magnitude(self.components)
    }

    /// Returns the float point with the same direction and magnitude 1.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the magnitude is zero, and
    /// [`GeometryError::InvalidArgument`] if a component is infinite or NaN.
    pub fn unit_vector(&self) -> Result<Self> {
        let magnitude = self.magnitude();
        if !magnitude.is_finite() {
            tracing::debug!(magnitude, "cannot normalize point");
            return Err(GeometryError::InvalidArgument(
                "magnitude is not finite".to_string(),
            ));
        }
        if magnitude <= 0.0 {
            tracing::debug!("cannot normalize a zero-length point");
            return Err(GeometryError::ZeroVector);
        }
        Ok(*self / magnitude)
    }

    /// Returns the distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        components::distance(self.components, other.components)
    }

    /// Divides by a scalar, rejecting a zero divisor.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: impl Into<Scalar>) -> Result<Self> {
        let rhs = rhs.into();
        if rhs.is_zero() {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(*self / rhs)
    }

    /// Returns a copy converted to the dtype named by `target`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if `target` is neither
    /// `"int"` nor `"float"`, or a component cannot be represented as an int.
    pub fn as_type(&self, target: &str) -> Result<Self> {
        self.cast(target.parse()?)
    }

    /// Returns a copy converted to `dtype`.
    ///
    /// # Errors
    ///
    /// See [`Point3D::as_type`].
    pub fn cast(&self, dtype: DType) -> Result<Self> {
        components::cast(self.components, dtype).map(|components| Self { components })
    }

    /// Compares components within [`crate::math::TOLERANCE`], ignoring dtype.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        components::approx_eq(self.components, other.components)
    }
}

impl<T: Into<Scalar>> From<[T; 3]> for Point3D {
    fn from(components: [T; 3]) -> Self {
        Self::from_array(components)
    }
}

impl<A, B, C> From<(A, B, C)> for Point3D
where
    A: Into<Scalar>,
    B: Into<Scalar>,
    C: Into<Scalar>,
{
    fn from((x, y, z): (A, B, C)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point3> for Point3D {
    fn from(p: Point3) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl From<Point3D> for Point3 {
    fn from(p: Point3D) -> Self {
        let [x, y, z] = p.to_f64_array();
        Self::new(x, y, z)
    }
}

impl From<Point3D> for Vector3 {
    fn from(p: Point3D) -> Self {
        Self::from(p.to_f64_array())
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        components::write_repr(f, "Point3D", &self.components, LABELS)
    }
}

impl Index<usize> for Point3D {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Scalar {
        &self.components[index]
    }
}

impl IntoIterator for Point3D {
    type Item = Scalar;
    type IntoIter = std::array::IntoIter<Scalar, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a> IntoIterator for &'a Point3D {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Add for Point3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            components: components::zip_with(self.components, rhs.components, Add::add),
        }
    }
}

impl Sub for Point3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            components: components::zip_with(self.components, rhs.components, Sub::sub),
        }
    }
}

impl<T: Into<Scalar>> Mul<T> for Point3D {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let rhs = rhs.into();
        Self::from_array(self.components.map(|c| c * rhs))
    }
}

/// True division; the result is always float, even for int / int.
impl<T: Into<Scalar>> Div<T> for Point3D {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        let rhs = rhs.into();
        Self::from_array(self.components.map(|c| c / rhs))
    }
}

impl Neg for Point3D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_array(self.components.map(Neg::neg))
    }
}
