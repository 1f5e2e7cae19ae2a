//! Arity-generic helpers shared by the fixed-size point types.
//!
//! Every function here works on `[Scalar; N]` and preserves the dtype
//! invariant: the returned array is either all `Int` or all `Float`.

use std::any::Any;
use std::fmt;

use super::scalar::{DType, Scalar};
use super::REPR_PRECISION;
use crate::error::{GeometryError, Result};

/// Promotes every component to `Float` unless all of them are `Int`.
#[must_use]
pub fn unify<const N: usize>(components: [Scalar; N]) -> [Scalar; N] {
    if components.iter().all(|c| c.dtype() == DType::Int) {
        components
    } else {
        components.map(Scalar::promote)
    }
}

/// Returns the dtype of an already unified component array.
#[must_use]
pub fn dtype_of<const N: usize>(components: &[Scalar; N]) -> DType {
    components.first().map_or(DType::Int, |c| c.dtype())
}

/// Applies `op` pairwise and unifies the result.
#[must_use]
pub fn zip_with<const N: usize>(
    lhs: [Scalar; N],
    rhs: [Scalar; N],
    op: impl Fn(Scalar, Scalar) -> Scalar,
) -> [Scalar; N] {
    let mut out = lhs;
    for (slot, r) in out.iter_mut().zip(rhs) {
        *slot = op(*slot, r);
    }
    unify(out)
}

/// Converts every component to `f64`.
#[must_use]
pub fn to_f64_array<const N: usize>(components: [Scalar; N]) -> [f64; N] {
    components.map(Scalar::to_f64)
}

/// Euclidean norm of the components.
#[must_use]
pub fn magnitude<const N: usize>(components: [Scalar; N]) -> f64 {
    norm(nalgebra::SVector::from(to_f64_array(components)))
}

/// Euclidean distance, computed in `f64` so integer components never overflow.
#[must_use]
pub fn distance<const N: usize>(lhs: [Scalar; N], rhs: [Scalar; N]) -> f64 {
    let lhs = nalgebra::SVector::<f64, N>::from(to_f64_array(lhs));
    let rhs = nalgebra::SVector::<f64, N>::from(to_f64_array(rhs));
    norm(lhs - rhs)
}

/// Norm that rescales by the largest component when the squared sum overflows.
fn norm<const N: usize>(v: nalgebra::SVector<f64, N>) -> f64 {
    let plain = v.norm();
    if plain.is_finite() {
        return plain;
    }
    let scale = v.iter().fold(0.0_f64, |m, c| m.max(c.abs()));
    if !scale.is_finite() {
        return plain;
    }
    scale * (v / scale).norm()
}

/// Converts every component to `dtype`.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidArgument`] if a float component cannot be
/// rounded to an `i64`.
pub fn cast<const N: usize>(components: [Scalar; N], dtype: DType) -> Result<[Scalar; N]> {
    match dtype {
        DType::Float => Ok(components.map(Scalar::promote)),
        DType::Int => {
            let mut out = [Scalar::Int(0); N];
            for (slot, c) in out.iter_mut().zip(components) {
                *slot = Scalar::Int(c.round_to_int()?);
            }
            Ok(out)
        }
    }
}

/// Reads exactly `N` components from a slice.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidArgument`] if the slice length is not `N`.
pub fn from_slice<const N: usize>(components: &[Scalar]) -> Result<[Scalar; N]> {
    <[Scalar; N]>::try_from(components)
        .map(unify)
        .map_err(|_| {
            GeometryError::InvalidArgument(format!(
                "expected a sequence of {N} components, got {}",
                components.len()
            ))
        })
}

/// Reads one dynamically typed argument per component name.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidArgument`] when a component is missing or
/// there are surplus arguments, and [`GeometryError::TypeMismatch`] when an
/// argument is not numeric.
pub fn from_args<const N: usize>(
    args: &[&dyn Any],
    names: [&'static str; N],
) -> Result<[Scalar; N]> {
    if args.len() > N {
        return Err(GeometryError::InvalidArgument(format!(
            "expected {N} arguments, got {}",
            args.len()
        )));
    }
    let mut out = [Scalar::Int(0); N];
    for (i, (slot, name)) in out.iter_mut().zip(names).enumerate() {
        let Some(arg) = args.get(i) else {
            tracing::debug!(component = name, "missing positional component");
            return Err(GeometryError::InvalidArgument(format!(
                "missing required component {name}"
            )));
        };
        *slot = Scalar::try_from_any(*arg, name)?;
    }
    Ok(unify(out))
}

/// Looks up a component by position.
///
/// # Errors
///
/// Returns [`GeometryError::IndexOutOfRange`] if `index >= N`.
pub fn get<const N: usize>(components: &[Scalar; N], index: usize) -> Result<Scalar> {
    components
        .get(index)
        .copied()
        .ok_or(GeometryError::IndexOutOfRange { index, len: N })
}

/// Componentwise comparison within [`super::TOLERANCE`], ignoring dtype.
#[must_use]
pub fn approx_eq<const N: usize>(lhs: [Scalar; N], rhs: [Scalar; N]) -> bool {
    lhs.iter()
        .zip(rhs)
        .all(|(a, b)| super::approx_eq(a.to_f64(), b.to_f64()))
}

/// Writes `<Name(x=.., y=.., dtype=..)>`.
pub fn write_repr<const N: usize>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    components: &[Scalar; N],
    labels: [&str; N],
) -> fmt::Result {
    let dtype = dtype_of(components);
    write!(f, "<{name}(")?;
    for (c, label) in components.iter().zip(labels) {
        match dtype {
            DType::Int => write!(f, "{label}={c}, ")?,
            DType::Float => write!(f, "{label}={c:.prec$}, ", prec = REPR_PRECISION)?,
        }
    }
    write!(f, "dtype={dtype})>")
}
