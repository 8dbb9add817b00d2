//! Dispersion and shape statistics
//!
//! Variance uses the delta-degrees-of-freedom convention: the mean of squared
//! deviations scaled by `n / (n - ddof)`. `ddof = 0` gives the population
//! variance, `ddof = 1` the sample variance. Skewness and kurtosis standardize
//! with the population standard deviation.

use super::primitives::{mean, mean_by, mean_lane};
use crate::axis::{reduce_lanes, Reduced};
use crate::errors::{MeistatError, Result};
use ndarray::{ArrayBase, ArrayView1, Data, Dimension};

/// `n - ddof` as a float, or an error when it is not positive
pub(crate) fn degrees_of_freedom(n: usize, ddof: usize) -> Result<f64> {
    if ddof >= n {
        return Err(MeistatError::InvalidDdof { n, ddof });
    }
    Ok((n - ddof) as f64)
}

pub(crate) fn variance_lane(lane: ArrayView1<'_, f64>, ddof: usize) -> Result<f64> {
    let n = lane.len();
    let divisor = degrees_of_freedom(n, ddof)?;
    let center = mean_lane(lane)?;
    let spread = mean_by(lane, |value| {
        let deviation = value - center;
        deviation * deviation
    })?;
    Ok(spread * n as f64 / divisor)
}

/// Mean of the `power`-th power of z-scores
fn standardized_moment(lane: ArrayView1<'_, f64>, power: i32) -> Result<f64> {
    let center = mean_lane(lane)?;
    let scale = variance_lane(lane, 0)?.sqrt();
    mean_by(lane, |value| ((value - center) / scale).powi(power))
}

pub(crate) fn skewness_lane(lane: ArrayView1<'_, f64>) -> Result<f64> {
    standardized_moment(lane, 3)
}

pub(crate) fn kurtosis_lane(lane: ArrayView1<'_, f64>) -> Result<f64> {
    Ok(standardized_moment(lane, 4)? - 3.0)
}

/// Variance with `ddof` delta degrees of freedom, of all elements or along `axis`
///
/// # Errors
///
/// Returns an error if the array is empty, the axis is invalid, or
/// `ddof >= n`.
pub fn dispersion<S, D>(x: &ArrayBase<S, D>, ddof: usize, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    reduce_lanes(x, axis, |lane| variance_lane(lane, ddof))
}

/// Standard deviation, the square root of [`dispersion`]
///
/// # Errors
///
/// Same conditions as [`dispersion`].
pub fn std_dev<S, D>(x: &ArrayBase<S, D>, ddof: usize, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Ok(dispersion(x, ddof, axis)?.map(f64::sqrt))
}

/// Coefficient of variation `std / mean` (population std)
///
/// NaN where the mean is exactly zero.
///
/// # Errors
///
/// Returns an error if the array is empty or the axis is invalid.
pub fn cv<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let center = mean(x, axis)?;
    std_dev(x, 0, axis)?.zip_with(&center, |spread, center| {
        if center == 0.0 {
            f64::NAN
        } else {
            spread / center
        }
    })
}

/// Standard error of the mean, `std(ddof) / sqrt(n)`
///
/// # Errors
///
/// Same conditions as [`dispersion`].
pub fn sem<S, D>(x: &ArrayBase<S, D>, ddof: usize, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    reduce_lanes(x, axis, |lane| {
        Ok(variance_lane(lane, ddof)?.sqrt() / (lane.len() as f64).sqrt())
    })
}

/// Mean absolute deviation around the mean
///
/// # Errors
///
/// Returns an error if the array is empty or the axis is invalid.
pub fn mad<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    reduce_lanes(x, axis, |lane| {
        let center = mean_lane(lane)?;
        mean_by(lane, |value| (value - center).abs())
    })
}

/// Skewness, the third standardized moment
///
/// NaN for lanes with zero variance.
///
/// # Errors
///
/// Returns an error if the array is empty or the axis is invalid.
pub fn skewness<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    reduce_lanes(x, axis, skewness_lane)
}

/// Excess kurtosis, the fourth standardized moment minus 3
///
/// A normal distribution scores 0. NaN for lanes with zero variance.
///
/// # Errors
///
/// Returns an error if the array is empty or the axis is invalid.
pub fn kurtosis<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    reduce_lanes(x, axis, kurtosis_lane)
}
