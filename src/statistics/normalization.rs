//! Normalization, cumulative transforms and alternative means

use super::dispersion::std_dev;
use super::order::sorted_lane;
use super::primitives::{mean, mean_lane, product_lane, sum_by};
use crate::axis::{apply_along, check_axis, flatten, reduce_lanes, Reduced};
use crate::errors::{MeistatError, Result};
use ndarray::{aview1, ArrayBase, ArrayD, Axis, Data, Dimension};

/// Standardize to zero mean and unit (population) standard deviation
///
/// With an axis, each lane is standardized by its own mean and standard
/// deviation. The output has the input's shape. Constant lanes produce NaN.
///
/// # Errors
///
/// Returns an error if the array is empty or the axis is invalid.
pub fn zscore<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let center = mean(x, axis)?;
    let scale = std_dev(x, 0, axis)?;
    let centered = apply_along(x, &center, axis, |value, center| value - center)?;
    apply_along(&centered, &scale, axis, |deviation, scale| deviation / scale)
}

fn accumulate<S, D, F>(x: &ArrayBase<S, D>, axis: Option<usize>, step: F) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
    F: Fn(f64, f64) -> f64,
{
    if x.is_empty() {
        return Err(MeistatError::EmptyInput);
    }

    let (mut running, along) = match axis {
        None => (flatten(x)?.into_owned().into_dyn(), Axis(0)),
        Some(k) => {
            check_axis(x.ndim(), k)?;
            (x.to_owned().into_dyn(), Axis(k))
        }
    };
    running.accumulate_axis_inplace(along, |&previous, current| *current = step(previous, *current));
    Ok(running)
}

/// Running sum; flattened for `axis = None`, otherwise along the axis
///
/// # Errors
///
/// Returns an error if the array is empty or the axis is invalid.
pub fn cumulative_sum<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    accumulate(x, axis, |total, value| total + value)
}

/// Running product; flattened for `axis = None`, otherwise along the axis
///
/// # Errors
///
/// Returns an error if the array is empty or the axis is invalid.
pub fn cumulative_product<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<ArrayD<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    accumulate(x, axis, |total, value| total * value)
}

/// Geometric mean, `product ** (1 / n)`
///
/// # Errors
///
/// Returns an error if any element is not strictly positive, the array is
/// empty, or the axis is invalid.
pub fn geometric_mean<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if let Some(&value) = x.iter().find(|&&value| value <= 0.0) {
        return Err(MeistatError::NonPositiveValue {
            function: "geometric_mean",
            value,
        });
    }
    reduce_lanes(x, axis, |lane| Ok(product_lane(lane)?.powf(1.0 / lane.len() as f64)))
}

/// Harmonic mean, `n / sum(1 / x)`
///
/// # Errors
///
/// Returns an error if any element is zero, the array is empty, or the axis is
/// invalid.
pub fn harmonic_mean<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if x.iter().any(|&value| value == 0.0) {
        return Err(MeistatError::ZeroValue {
            function: "harmonic_mean",
        });
    }
    reduce_lanes(x, axis, |lane| Ok(lane.len() as f64 / sum_by(lane, |value| 1.0 / value)?))
}

/// Mean after dropping `floor(n * proportion)` sorted values from each end
///
/// A proportion that drops nothing returns the plain mean of the lane.
///
/// # Errors
///
/// Returns an error if `proportion` is outside `[0, 0.5)`, the array is empty,
/// or the axis is invalid.
pub fn trimmed_mean<S, D>(x: &ArrayBase<S, D>, proportion: f64, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if !(0.0..0.5).contains(&proportion) {
        return Err(MeistatError::OutOfRange {
            name: "proportion",
            value: proportion,
            range: "[0, 0.5)",
        });
    }

    reduce_lanes(x, axis, |lane| {
        let n = lane.len();
        let cut = (n as f64 * proportion).floor() as usize;
        if cut == 0 {
            return mean_lane(lane);
        }
        let sorted = sorted_lane(lane);
        mean_lane(aview1(&sorted[cut..n - cut]))
    })
}
