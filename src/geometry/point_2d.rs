use std::any::Any;
use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use crate::error::{GeometryError, Result};
use crate::math::components;
use crate::math::{DType, Point2, Scalar, Vector2};

const LABELS: [&str; 2] = ["x", "y"];

/// A point (or vector) in 2D space with a uniform integer or float dtype.
///
/// Points are immutable values: arithmetic, casting and normalization all
/// return new points.
///
/// ```
/// use jicgeometry::{DType, Point2D};
///
/// let p = Point2D::new(3, 0) + Point2D::from([0, 4]);
/// assert_eq!(p.dtype(), DType::Int);
/// assert_eq!(p.magnitude(), 5.0);
/// assert_eq!((p / 2).dtype(), DType::Float);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    components: [Scalar; 2],
}

impl Point2D {
    /// Number of components.
    pub const ARITY: usize = 2;

    /// Creates a point from separate `x`, `y` values.
    ///
    /// If either value is a float, both are stored as floats.
    #[must_use]
    pub fn new(x: impl Into<Scalar>, y: impl Into<Scalar>) -> Self {
        Self::from_array([x.into(), y.into()])
    }

    /// Creates a point from an `[x, y]` sequence.
    #[must_use]
    pub fn from_array<T: Into<Scalar>>(components: [T; 2]) -> Self {
        Self {
            components: components::unify(components.map(Into::into)),
        }
    }

    /// Creates a point from a slice that must hold exactly two components.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if the slice length is not 2.
    pub fn try_from_slice(components: &[Scalar]) -> Result<Self> {
        components::from_slice(components).map(|components| Self { components })
    }

    /// Creates a point from dynamically typed `x`, `y` arguments.
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

    /// Returns the shared representation of the components.
    #[must_use]
    pub fn dtype(&self) -> DType {
        components::dtype_of(&self.components)
    }

    /// Returns the component at `index` (0 = x, 1 = y).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] for any other index.
    pub fn get(&self, index: usize) -> Result<Scalar> {
        components::get(&self.components, index)
    }

    /// Returns the number of components, always 2.
    #[must_use]
    #[allow(clippy::len_without_is_empty, clippy::unused_self)]
    pub fn len(&self) -> usize {
        Self::ARITY
    }

    /// Iterates over the components in `x`, `y` order.
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.components.iter()
    }

    /// Returns the components as a tuple in `x`, `y` order.
    #[must_use]
    pub fn as_tuple(&self) -> (Scalar, Scalar) {
        (self.components[0], self.components[1])
    }

    /// Returns the components as an array.
    #[must_use]
    pub fn to_array(&self) -> [Scalar; 2] {
        self.components
    }

    /// Returns the components as plain floats.
    #[must_use]
    pub fn to_f64_array(&self) -> [f64; 2] {
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

    /// Returns a copy converted to `dtype`. Floats round ties to even.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if a component is not finite
    /// or out of `i64` range when casting to int.
    pub fn cast(&self, dtype: DType) -> Result<Self> {
        components::cast(self.components, dtype).map(|components| Self { components })
    }

    /// Compares components within [`crate::math::TOLERANCE`], ignoring dtype.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        components::approx_eq(self.components, other.components)
    }
}

impl<T: Into<Scalar>> From<[T; 2]> for Point2D {
    fn from(components: [T; 2]) -> Self {
        Self::from_array(components)
    }
}

impl<A: Into<Scalar>, B: Into<Scalar>> From<(A, B)> for Point2D {
    fn from((x, y): (A, B)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2> for Point2D {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point2D> for Point2 {
    fn from(p: Point2D) -> Self {
        let [x, y] = p.to_f64_array();
        Self::new(x, y)
    }
}

impl From<Point2D> for Vector2 {
    fn from(p: Point2D) -> Self {
        Self::from(p.to_f64_array())
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        components::write_repr(f, "Point2D", &self.components, LABELS)
    }
}

impl Index<usize> for Point2D {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Scalar {
        &self.components[index]
    }
}

impl IntoIterator for Point2D {
    type Item = Scalar;
    type IntoIter = std::array::IntoIter<Scalar, 2>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a> IntoIterator for &'a Point2D {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Add for Point2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            components: components::zip_with(self.components, rhs.components, Add::add),
        }
    }
}

impl Sub for Point2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            components: components::zip_with(self.components, rhs.components, Sub::sub),
        }
    }
}

impl<T: Into<Scalar>> Mul<T> for Point2D {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let rhs = rhs.into();
        Self::from_array(self.components.map(|c| c * rhs))
    }
}

/// True division; the result is always float, even for int / int.
impl<T: Into<Scalar>> Div<T> for Point2D {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        let rhs = rhs.into();
        Self::from_array(self.components.map(|c| c / rhs))
    }
}

impl Neg for Point2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_array(self.components.map(Neg::neg))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn new_from_ints_keeps_int_dtype() {
        let p = Point2D::new(3, 0);
        assert_eq!(p.x(), Scalar::Int(3));
        assert_eq!(p.y(), Scalar::Int(0));
        assert_eq!(p.dtype(), DType::Int);
    }

    #[test]
    fn sequence_and_separate_forms_agree() {
        assert_eq!(Point2D::from([0, 4]), Point2D::new(0, 4));
        assert_eq!(Point2D::from((0, 4)), Point2D::new(0, 4));
        let slice = [Scalar::Int(0), Scalar::Int(4)];
        assert_eq!(Point2D::try_from_slice(&slice).unwrap(), Point2D::new(0, 4));
    }

    #[test]
    fn mixed_input_promotes_to_float() {
        let p = Point2D::new(1, 2.5);
        assert_eq!(p.dtype(), DType::Float);
        assert_eq!(p.x(), Scalar::Float(1.0));
        assert_eq!(p.y(), Scalar::Float(2.5));
    }

    #[test]
    fn try_from_args_rejects_non_numeric() {
        let args: [&dyn Any; 2] = [&"1", &2.0];
        assert_eq!(
            Point2D::try_from_args(&args),
            Err(GeometryError::TypeMismatch { component: "x" })
        );
        let args: [&dyn Any; 2] = [&1, &true];
        assert_eq!(
            Point2D::try_from_args(&args),
            Err(GeometryError::TypeMismatch { component: "y" })
        );
    }

    #[test]
    fn try_from_args_requires_y() {
        let args: [&dyn Any; 1] = [&1];
        let err = Point2D::try_from_args(&args).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(m) if m.contains('y')));
    }

    #[test]
    fn try_from_slice_rejects_wrong_length() {
        let err = Point2D::try_from_slice(&[Scalar::Int(1)]).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(_)));
    }

    #[test]
    fn int_and_float_points_are_not_equal() {
        assert_ne!(Point2D::new(1, 2), Point2D::new(1.0, 2.0));
        assert_eq!(Point2D::new(1, 2), Point2D::new(1, 2));
    }

    #[test]
    fn add_and_sub() {
        let sum = Point2D::new(3, 0) + Point2D::new(0, 4);
        assert_eq!(sum, Point2D::new(3, 4));
        assert_eq!(sum.dtype(), DType::Int);
        assert_eq!(Point2D::new(1, 2) - Point2D::new(4, 6), Point2D::new(-3, -4));
        assert_eq!(Point2D::new(3, 0) - Point2D::new(0, 4), Point2D::new(3, -4));
    }

    #[test]
    fn self_subtraction_is_int_zero() {
        let p = Point2D::new(7, -2);
        assert_eq!(p - p, Point2D::new(0, 0));
    }

    #[test]
    fn mixed_add_promotes() {
        let sum = Point2D::new(2, 3) + Point2D::new(2.0, 3.0);
        assert_eq!(sum, Point2D::new(4.0, 6.0));
    }

    #[test]
    fn scalar_multiplication() {
        assert_eq!(Point2D::new(3, 4) * 2, Point2D::new(6, 8));
        assert_eq!(Point2D::new(3, 4) * 2.0, Point2D::new(6.0, 8.0));
    }

    #[test]
    fn division_always_produces_float() {
        let q = Point2D::new(3, 0) / 2;
        assert_eq!(q, Point2D::new(1.5, 0.0));
        assert_eq!((Point2D::new(4, 2) / 2).dtype(), DType::Float);
    }

    #[test]
    fn checked_div_rejects_zero() {
        assert_eq!(
            Point2D::new(1, 1).checked_div(0),
            Err(GeometryError::DivisionByZero)
        );
        assert_eq!(
            Point2D::new(1, 1).checked_div(0.0),
            Err(GeometryError::DivisionByZero)
        );
        assert_eq!(Point2D::new(2, 4).checked_div(2), Ok(Point2D::new(1.0, 2.0)));
    }

    #[test]
    fn plain_division_by_zero_follows_ieee() {
        let q = Point2D::new(1, 0) / 0;
        assert!(q.x().to_f64().is_infinite());
        assert!(q.y().to_f64().is_nan());
    }

    #[test]
    fn negation_keeps_dtype() {
        assert_eq!(-Point2D::new(1, -2), Point2D::new(-1, 2));
        assert_eq!(-Point2D::new(1.5, 0.0), Point2D::new(-1.5, -0.0));
    }

    #[test]
    fn magnitude_and_unit_vector() {
        let p = Point2D::new(3, 4);
        assert_eq!(p.magnitude(), 5.0);
        let u = p.unit_vector().unwrap();
        assert_eq!(u.dtype(), DType::Float);
        assert!(u.approx_eq(&Point2D::new(0.6, 0.8)));
        assert_eq!(u.to_string(), "<Point2D(x=0.60, y=0.80, dtype=float)>");
    }

    #[test]
    fn unit_vector_has_unit_length() {
        let u = Point2D::new(-7, 13).unit_vector().unwrap();
        let [x, y] = u.to_f64_array();
        assert_relative_eq!(x * x + y * y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn unit_vector_of_zero_fails() {
        assert_eq!(
            Point2D::new(0, 0).unit_vector(),
            Err(GeometryError::ZeroVector)
        );
    }

    #[test]
    fn int_overflow_promotes_whole_point_to_float() {
        let sum = Point2D::new(i64::MAX, 0) + Point2D::new(1, 0);
        assert_eq!(sum.dtype(), DType::Float);
        assert_eq!(sum, Point2D::new(9_223_372_036_854_775_808.0, 0.0));

        let product = Point2D::new(i64::MAX, 1) * 2;
        assert_eq!(product, Point2D::new(18_446_744_073_709_551_616.0, 2.0));

        let negated = -Point2D::new(i64::MIN, 1);
        assert_eq!(negated, Point2D::new(9_223_372_036_854_775_808.0, -1.0));

        assert_eq!(
            Point2D::new(i64::MAX - 1, 0) + Point2D::new(1, 0),
            Point2D::new(i64::MAX, 0)
        );
    }

    #[test]
    fn distance_between_extreme_int_points() {
        let d = Point2D::new(i64::MIN, 0).distance(&Point2D::new(i64::MAX, 0));
        assert_relative_eq!(d, 18_446_744_073_709_551_616.0, max_relative = 1e-12);
    }

    #[test]
    fn unit_vector_of_huge_point() {
        let p = Point2D::new(1e200, 1e200);
        assert!(p.magnitude().is_finite());
        let u = p.unit_vector().unwrap();
        let half_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(u.x().to_f64(), half_sqrt2, epsilon = 1e-12);
        assert_relative_eq!(u.y().to_f64(), half_sqrt2, epsilon = 1e-12);
    }

    #[test]
    fn unit_vector_of_non_finite_point_is_invalid() {
        assert!(matches!(
            Point2D::new(f64::INFINITY, 0.0).unit_vector(),
            Err(GeometryError::InvalidArgument(_))
        ));
        assert!(matches!(
            Point2D::new(f64::NAN, 1.0).unit_vector(),
            Err(GeometryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn distance_between_points() {
        assert_eq!(Point2D::new(3, 0).distance(&Point2D::new(0, 4)), 5.0);
    }

    #[test]
    fn indexing() {
        let p = Point2D::new(3, 5);
        assert_eq!(p.get(0), Ok(Scalar::Int(3)));
        assert_eq!(p[1], Scalar::Int(5));
        assert_eq!(
            p.get(2),
            Err(GeometryError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(p.len(), 2);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_operator_panics_out_of_range() {
        let _ = Point2D::new(3, 5)[2];
    }

    #[test]
    fn iteration_restarts_each_time() {
        let p = Point2D::new(5, 8);
        let first: Vec<Scalar> = p.iter().copied().collect();
        let second: Vec<Scalar> = p.into_iter().collect();
        assert_eq!(first, vec![Scalar::Int(5), Scalar::Int(8)]);
        assert_eq!(first, second);
        assert_eq!(p.as_tuple(), (Scalar::Int(5), Scalar::Int(8)));
    }

    #[test]
    fn as_type_conversions() {
        let p = Point2D::new(5.9, 8.5);
        assert_eq!(p.as_type("int").unwrap(), Point2D::new(6, 8));
        assert_eq!(
            Point2D::new(5, 8).as_type("float").unwrap(),
            Point2D::new(5.0, 8.0)
        );
        assert!(matches!(
            p.as_type("Idontexist"),
            Err(GeometryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn float_round_trip_on_int_point_is_identity() {
        let p = Point2D::new(-4, 9);
        let round_trip = p.as_type("float").unwrap().as_type("int").unwrap();
        assert_eq!(round_trip, p.as_type("int").unwrap());
    }

    #[test]
    fn display_formats_by_dtype() {
        assert_eq!(
            Point2D::new(1, 2).to_string(),
            "<Point2D(x=1, y=2, dtype=int)>"
        );
        assert_eq!(
            Point2D::new(1.333_333_333, 2.666_666_666_7).to_string(),
            "<Point2D(x=1.33, y=2.67, dtype=float)>"
        );
    }

    #[test]
    fn nalgebra_interop() {
        let v: Vector2 = Point2D::new(3, 4).into();
        assert_relative_eq!(v.norm(), 5.0);
        let p: Point2 = Point2D::new(1.5, 2).into();
        assert_eq!(Point2D::from(p), Point2D::new(1.5, 2.0));
    }
}
