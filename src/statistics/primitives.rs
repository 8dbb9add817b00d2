//! Primitive reductions: sum, mean, min, max and product
//!
//! Every other statistic in the crate reduces through the lane kernels defined
//! here, so traversal order and empty-input handling are decided in one place.
//! Accumulation is a plain left-to-right fold in the order elements are
//! encountered; nothing is reordered or compensated.

use crate::axis::{reduce_lanes, Reduced};
use crate::errors::{MeistatError, Result};
use ndarray::{ArrayBase, ArrayView1, Data, Dimension};

/// Sum of `f(v)` over a lane, accumulated left to right
pub(crate) fn sum_by<F>(lane: ArrayView1<'_, f64>, f: F) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    if lane.is_empty() {
        return Err(MeistatError::EmptyInput);
    }
    Ok(lane.iter().fold(0.0, |acc, &value| acc + f(value)))
}

/// Mean of `f(v)` over a lane
pub(crate) fn mean_by<F>(lane: ArrayView1<'_, f64>, f: F) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    Ok(sum_by(lane, f)? / lane.len() as f64)
}

pub(crate) fn sum_lane(lane: ArrayView1<'_, f64>) -> Result<f64> {
    sum_by(lane, |value| value)
}

pub(crate) fn mean_lane(lane: ArrayView1<'_, f64>) -> Result<f64> {
    mean_by(lane, |value| value)
}

pub(crate) fn product_lane(lane: ArrayView1<'_, f64>) -> Result<f64> {
    if lane.is_empty() {
        return Err(MeistatError::EmptyInput);
    }
    Ok(lane.iter().fold(1.0, |acc, &value| acc * value))
}

// The first extreme value wins: later equal values never replace it, and a NaN
// fails every comparison so it only survives when it comes first.
pub(crate) fn min_lane(lane: ArrayView1<'_, f64>) -> Result<f64> {
    let mut values = lane.iter();
    let first = *values.next().ok_or(MeistatError::EmptyInput)?;
    Ok(values.fold(first, |best, &value| if value < best { value } else { best }))
}

pub(crate) fn max_lane(lane: ArrayView1<'_, f64>) -> Result<f64> {
    let mut values = lane.iter();
    let first = *values.next().ok_or(MeistatError::EmptyInput)?;
    Ok(values.fold(first, |best, &value| if value > best { value } else { best }))
}

/// Sum of all elements, or along `axis`
///
/// # Errors
///
/// Returns an error if the array is empty or the axis is invalid.
pub fn sum<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    reduce_lanes(x, axis, sum_lane)
}

/// Arithmetic mean of all elements, or along `axis`
///
/// The divisor is the number of elements that contributed to each sum: the
/// total size for `axis = None`, otherwise the length of the reduced axis.
///
/// # Errors
///
/// Returns an error if the array is empty or the axis is invalid.
pub fn mean<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    reduce_lanes(x, axis, mean_lane)
}

/// Minimum of all elements, or along `axis`
///
/// # Errors
///
/// Returns an error if the array is empty or the axis is invalid.
pub fn min<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    reduce_lanes(x, axis, min_lane)
}

/// Maximum of all elements, or along `axis`
///
/// # Errors
///
/// Returns an error if the array is empty or the axis is invalid.
pub fn max<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    reduce_lanes(x, axis, max_lane)
}

/// Product of all elements, or along `axis`
///
/// Same traversal order as [`sum`].
///
/// # Errors
///
/// Returns an error if the array is empty or the axis is invalid.
pub fn product<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    reduce_lanes(x, axis, product_lane)
}
