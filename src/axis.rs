//! Axis handling shared by every statistic
//!
//! A reduction either collapses the whole array to a scalar (`axis = None`) or
//! runs a 1-D kernel over every lane along one axis of a 1-D or 2-D array. This
//! module owns that driver, the [`Reduced`] result type and the explicit
//! broadcast used to bring a reduced result back to the input's shape.

use crate::errors::{MeistatError, Result};
use ndarray::{arr0, ArrayBase, ArrayD, ArrayView1, Axis, CowArray, Data, Dimension, Ix1, IxDyn, Zip};
use tracing::trace;

/// Result of a reduction
#[derive(Debug, Clone, PartialEq)]
pub enum Reduced {
    /// Whole-array reduction, or an axis reduction of a 1-D array
    Scalar(f64),
    /// Axis reduction; shape is the input shape with the reduced axis removed
    Array(ArrayD<f64>),
}

impl Reduced {
    /// The scalar value, if this is a whole-array result
    #[must_use]
    pub const fn scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Array(_) => None,
        }
    }

    /// The array value, if this is an axis result
    #[must_use]
    pub const fn array(&self) -> Option<&ArrayD<f64>> {
        match self {
            Self::Scalar(_) => None,
            Self::Array(data) => Some(data),
        }
    }

    /// Convert into an array; a scalar becomes a 0-dimensional array
    #[must_use]
    pub fn into_array(self) -> ArrayD<f64> {
        match self {
            Self::Scalar(value) => arr0(value).into_dyn(),
            Self::Array(data) => data,
        }
    }

    /// Shape of the result (empty for a scalar)
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        match self {
            Self::Scalar(_) => &[],
            Self::Array(data) => data.shape(),
        }
    }

    /// Apply `f` to every value
    #[must_use]
    pub fn map<F>(self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Self::Scalar(value) => Self::Scalar(f(value)),
            Self::Array(data) => Self::Array(data.mapv_into(f)),
        }
    }

    fn element_count(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Array(data) => data.len(),
        }
    }

    /// Combine two results of the same shape elementwise
    pub(crate) fn zip_with<F>(self, other: &Self, f: F) -> Result<Self>
    where
        F: Fn(f64, f64) -> f64,
    {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => Ok(Self::Scalar(f(a, *b))),
            (Self::Array(mut a), Self::Array(b)) if a.shape() == b.shape() => {
                Zip::from(&mut a).and(b).for_each(|lhs, &rhs| *lhs = f(*lhs, rhs));
                Ok(Self::Array(a))
            }
            (lhs, rhs) => Err(MeistatError::ShapeMismatch {
                left: lhs.element_count(),
                right: rhs.element_count(),
            }),
        }
    }
}

/// Validate an axis for an array with `ndim` dimensions
///
/// # Errors
///
/// Returns an error if the array is not 1-D or 2-D, or if `axis >= ndim`.
pub fn check_axis(ndim: usize, axis: usize) -> Result<()> {
    if !(1..=2).contains(&ndim) {
        return Err(MeistatError::UnsupportedDimensions { ndim });
    }
    if axis >= ndim {
        return Err(MeistatError::AxisOutOfBounds { axis, ndim });
    }
    Ok(())
}

/// All elements as a 1-D array in row-major order
///
/// Borrows the input when it is already in standard layout.
pub(crate) fn flatten<S, D>(x: &ArrayBase<S, D>) -> Result<CowArray<'_, f64, Ix1>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let len = x.len();
    Ok(x.as_standard_layout().into_shape(len)?)
}

/// Run `kernel` over the whole array or over every lane along `axis`
///
/// Lanes are visited in row-major order of the remaining axis, so the output
/// element at index `i` comes from lane `i`.
pub(crate) fn reduce_lanes<S, D, F>(x: &ArrayBase<S, D>, axis: Option<usize>, kernel: F) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
    F: Fn(ArrayView1<'_, f64>) -> Result<f64>,
{
    if x.is_empty() {
        return Err(MeistatError::EmptyInput);
    }

    let Some(k) = axis else {
        trace!(shape = ?x.shape(), "reducing all elements");
        let flat = flatten(x)?;
        return kernel(flat.view()).map(Reduced::Scalar);
    };

    check_axis(x.ndim(), k)?;
    trace!(axis = k, shape = ?x.shape(), "reducing along axis");

    let values = x
        .lanes(Axis(k))
        .into_iter()
        .map(&kernel)
        .collect::<Result<Vec<f64>>>()?;

    let mut shape = x.shape().to_vec();
    shape.remove(k);
    if shape.is_empty() {
        return values.first().copied().map(Reduced::Scalar).ok_or(MeistatError::EmptyInput);
    }

    Ok(Reduced::Array(ArrayD::from_shape_vec(IxDyn(&shape), values)?))
}

/// Reinsert the reduced axis at length 1
///
/// The returned array broadcasts against the input: a result reduced
/// along axis `k` of an `(r, c)` matrix comes back as `(1, c)` for `k = 0` and
/// `(r, 1)` for `k = 1`. Scalars come back as 0-dimensional arrays.
#[must_use]
pub fn expand_along(reduced: &Reduced, axis: Option<usize>) -> ArrayD<f64> {
    match (reduced, axis) {
        (Reduced::Array(data), Some(k)) => data.clone().insert_axis(Axis(k)),
        (other, _) => other.clone().into_array(),
    }
}

/// Elementwise `f(x, reduced)` with `reduced` expanded along `axis`
pub(crate) fn apply_along<S, D, F>(
    x: &ArrayBase<S, D>,
    reduced: &Reduced,
    axis: Option<usize>,
    f: F,
) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
    F: Fn(f64, f64) -> f64,
{
    let x = x.view().into_dyn();
    let expanded = expand_along(reduced, axis);
    let Some(stretched) = expanded.broadcast(x.raw_dim()) else {
        return Err(MeistatError::ShapeMismatch {
            left: x.len(),
            right: expanded.len(),
        });
    };

    Ok(Zip::from(&x).and(&stretched).map_collect(|&value, &stat| f(value, stat)))
}

/// Convert an array of any numeric element type to `f64`
#[must_use]
pub fn to_float<A, S, D>(x: &ArrayBase<S, D>) -> ArrayD<f64>
where
    A: Copy + Into<f64>,
    S: Data<Elem = A>,
    D: Dimension,
{
    x.mapv(|value| -> f64 { value.into() }).into_dyn()
}
