use std::any::Any;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::{GeometryError, Result};

/// Shared numeric representation of every component of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    Int,
    Float,
}

impl DType {
    /// Returns the canonical name, `"int"` or `"float"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DType {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "int" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            other => Err(GeometryError::InvalidArgument(format!(
                "invalid dtype: {other}"
            ))),
        }
    }
}

/// A single coordinate value, either an exact integer or a float.
///
/// Arithmetic between two `Int`s stays exact; any `Float` operand promotes the
/// result to `Float`. An `Int` result that would overflow `i64` is computed in
/// `f64` and returned as a `Float` instead. Division always yields a `Float`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
}

/// 2^63, the first float magnitude that no longer fits in an `i64`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

macro_rules! impl_from_lossless {
    ($variant:ident, $target:ty; $($ty:ty),*) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

impl_from_lossless!(Int, i64; i8, i16, i32, i64, u8, u16, u32);
impl_from_lossless!(Float, f64; f32, f64);

macro_rules! downcast_lossless {
    ($value:expr, $variant:ident, $target:ty; $($ty:ty),*) => {
        $(
            if let Some(&v) = $value.downcast_ref::<$ty>() {
                return Ok(Self::$variant(<$target>::from(v)));
            }
        )*
    };
}

macro_rules! downcast_wide {
    ($value:expr, $component:expr; $($ty:ty),*) => {
        $(
            if let Some(&v) = $value.downcast_ref::<$ty>() {
                return Self::from_wide(v, $component);
            }
        )*
    };
}

impl Scalar {
    /// Interprets a dynamically typed value as a coordinate.
    ///
    /// Only primitive integers, floats and `Scalar` itself are accepted. No
    /// parsing or coercion is attempted for anything else (strings, `bool`,
    /// `Option`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TypeMismatch`] for a non-numeric value, or
    /// [`GeometryError::InvalidArgument`] for an integer outside the `i64` range.
    pub fn try_from_any(value: &dyn Any, component: &'static str) -> Result<Self> {
        if let Some(&s) = value.downcast_ref::<Self>() {
            return Ok(s);
        }
        downcast_lossless!(value, Float, f64; f64, f32);
        downcast_lossless!(value, Int, i64; i64, i32, i16, i8, u32, u16, u8);
        downcast_wide!(value, component; u64, usize, isize, i128, u128);

        tracing::debug!(component, "rejected non-numeric component");
        Err(GeometryError::TypeMismatch { component })
    }

    fn from_wide<T>(value: T, component: &'static str) -> Result<Self>
    where
        T: TryInto<i64> + Copy + fmt::Display,
    {
        value.try_into().map(Self::Int).map_err(|_| {
            GeometryError::InvalidArgument(format!(
                "component {component} = {value} does not fit in a 64-bit integer"
            ))
        })
    }

    /// Returns the representation of this value.
    #[must_use]
    pub fn dtype(self) -> DType {
        match self {
            Self::Int(_) => DType::Int,
            Self::Float(_) => DType::Float,
        }
    }

    /// Returns the integer value, or `None` for a float.
    #[must_use]
    pub fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(v),
            Self::Float(_) => None,
        }
    }

    /// Returns the float value, or `None` for an integer.
    #[must_use]
    pub fn as_float(self) -> Option<f64> {
        match self {
            Self::Int(_) => None,
            Self::Float(v) => Some(v),
        }
    }

    /// Converts to `f64` regardless of representation.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Returns the same value as a `Float`.
    #[must_use]
    pub fn promote(self) -> Self {
        Self::Float(self.to_f64())
    }

    /// Rounds to the nearest integer, ties to even.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if the value is not finite or
    /// does not fit in an `i64` after rounding.
    #[allow(clippy::cast_possible_truncation)]
    pub fn round_to_int(self) -> Result<i64> {
        let v = match self {
            Self::Int(v) => return Ok(v),
            Self::Float(v) => v,
        };
        let rounded = v.round_ties_even();
        if !rounded.is_finite() || rounded >= I64_BOUND || rounded < -I64_BOUND {
            tracing::debug!(value = v, "cannot represent component as an integer");
            return Err(GeometryError::InvalidArgument(format!(
                "cannot convert {v} to int"
            )));
        }
        Ok(rounded as i64)
    }

    /// Returns `true` for integer or floating-point zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(v) => v == 0,
            Self::Float(v) => v == 0.0,
        }
    }
}

impl From<Scalar> for f64 {
    fn from(value: Scalar) -> Self {
        value.to_f64()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (*self, f.precision()) {
            (Self::Int(v), _) => write!(f, "{v}"),
            (Self::Float(v), Some(prec)) => write!(f, "{v:.prec$}"),
            (Self::Float(v), None) => write!(f, "{v:?}"),
        }
    }
}

impl Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => match a.checked_add(b) {
                Some(v) => Self::Int(v),
                None => Self::Float(self.to_f64() + rhs.to_f64()),
            },
            (a, b) => Self::Float(a.to_f64() + b.to_f64()),
        }
    }
}

impl Sub for Scalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => match a.checked_sub(b) {
                Some(v) => Self::Int(v),
                None => Self::Float(self.to_f64() - rhs.to_f64()),
            },
            (a, b) => Self::Float(a.to_f64() - b.to_f64()),
        }
    }
}

impl Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => match a.checked_mul(b) {
                Some(v) => Self::Int(v),
                None => Self::Float(self.to_f64() * rhs.to_f64()),
            },
            (a, b) => Self::Float(a.to_f64() * b.to_f64()),
        }
    }
}

/// True division: the quotient is always a `Float`, IEEE-754 for a zero divisor.
impl Div for Scalar {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::Float(self.to_f64() / rhs.to_f64())
    }
}

impl Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Int(v) => v.checked_neg().map_or(Self::Float(-self.to_f64()), Self::Int),
            Self::Float(v) => Self::Float(-v),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn dtype_parses_known_names() {
        assert_eq!("int".parse::<DType>(), Ok(DType::Int));
        assert_eq!("float".parse::<DType>(), Ok(DType::Float));
        assert_eq!(DType::Float.to_string(), "float");
    }

    #[test]
    fn dtype_rejects_unknown_name() {
        let err = "Idontexist".parse::<DType>().unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(_)));
    }

    #[test]
    fn int_arithmetic_stays_exact() {
        assert_eq!(Scalar::Int(2) + Scalar::Int(3), Scalar::Int(5));
        assert_eq!(Scalar::Int(2) - Scalar::Int(3), Scalar::Int(-1));
        assert_eq!(Scalar::Int(2) * Scalar::Int(3), Scalar::Int(6));
    }

    #[test]
    fn int_overflow_promotes_to_float() {
        assert_eq!(
            Scalar::Int(i64::MAX) + Scalar::Int(1),
            Scalar::Float(9_223_372_036_854_775_808.0)
        );
        assert_eq!(
            Scalar::Int(i64::MIN) - Scalar::Int(1),
            Scalar::Float(-9_223_372_036_854_775_808.0)
        );
        assert_eq!(
            Scalar::Int(i64::MAX) * Scalar::Int(2),
            Scalar::Float(18_446_744_073_709_551_616.0)
        );
        assert_eq!(-Scalar::Int(i64::MIN), Scalar::Float(9_223_372_036_854_775_808.0));
        assert_eq!(-Scalar::Int(i64::MAX), Scalar::Int(-i64::MAX));
    }

    #[test]
    fn mixed_arithmetic_promotes() {
        assert_eq!(Scalar::Int(2) + Scalar::Float(0.5), Scalar::Float(2.5));
        assert_eq!(Scalar::Float(2.0) * Scalar::Int(3), Scalar::Float(6.0));
    }

    #[test]
    fn division_is_always_float() {
        assert_eq!(Scalar::Int(4) / Scalar::Int(2), Scalar::Float(2.0));
        let inf = Scalar::Int(1) / Scalar::Int(0);
        assert!(inf.to_f64().is_infinite());
    }

    #[test]
    fn round_to_int_uses_ties_to_even() {
        assert_eq!(Scalar::Float(0.5).round_to_int(), Ok(0));
        assert_eq!(Scalar::Float(1.5).round_to_int(), Ok(2));
        assert_eq!(Scalar::Float(2.5).round_to_int(), Ok(2));
        assert_eq!(Scalar::Float(-2.5).round_to_int(), Ok(-2));
        assert_eq!(Scalar::Float(9.5).round_to_int(), Ok(10));
        assert_eq!(Scalar::Float(5.9).round_to_int(), Ok(6));
    }

    #[test]
    fn round_to_int_rejects_non_finite() {
        assert!(Scalar::Float(f64::NAN).round_to_int().is_err());
        assert!(Scalar::Float(f64::INFINITY).round_to_int().is_err());
        assert!(Scalar::Float(1e19).round_to_int().is_err());
    }

    #[test]
    fn try_from_any_accepts_primitives() {
        assert_eq!(Scalar::try_from_any(&3_i32, "x"), Ok(Scalar::Int(3)));
        assert_eq!(Scalar::try_from_any(&3_u8, "x"), Ok(Scalar::Int(3)));
        assert_eq!(Scalar::try_from_any(&1.5_f32, "x"), Ok(Scalar::Float(1.5)));
        assert_eq!(Scalar::try_from_any(&7_usize, "x"), Ok(Scalar::Int(7)));
        assert_eq!(
            Scalar::try_from_any(&Scalar::Float(2.0), "x"),
            Ok(Scalar::Float(2.0))
        );
    }

    #[test]
    fn try_from_any_rejects_non_numeric() {
        for value in [&"1" as &dyn Any, &true, &None::<i32>, &String::from("1.0")] {
            assert_eq!(
                Scalar::try_from_any(value, "y"),
                Err(GeometryError::TypeMismatch { component: "y" })
            );
        }
    }

    #[test]
    fn try_from_any_rejects_oversized_integer() {
        let err = Scalar::try_from_any(&u64::MAX, "z").unwrap_err();
        assert!(matches!(err, GeometryError::InvalidArgument(_)));
    }

    #[test]
    fn display_honours_precision_for_floats_only() {
        assert_eq!(format!("{:.2}", Scalar::Float(1.333_333)), "1.33");
        assert_eq!(format!("{:.2}", Scalar::Int(7)), "7");
        assert_eq!(Scalar::Float(3.0).to_string(), "3.0");
    }
}
