//! Order statistics: median, mode, quantiles, range and IQR
//!
//! Sort-based statistics work on a sorted copy of each lane. Sorting uses
//! `f64::total_cmp`, which places NaN after every number.

use super::primitives::{max, min};
use crate::axis::{flatten, reduce_lanes, Reduced};
use crate::errors::{MeistatError, Result};
use indexmap::IndexMap;
use ndarray::{ArrayBase, ArrayView1, Data, Dimension};

/// Sorted copy of a lane
pub(crate) fn sorted_lane(lane: ArrayView1<'_, f64>) -> Vec<f64> {
    let mut values = lane.to_vec();
    values.sort_by(f64::total_cmp);
    values
}

/// Median of an already sorted, non-empty slice
pub(crate) fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Linear interpolation between the order statistics bracketing `q * (n - 1)`
pub(crate) fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    let pos = q * (n - 1) as f64;
    let lower = pos.floor() as usize;
    if lower + 1 >= n {
        return sorted[n - 1];
    }
    let frac = pos - lower as f64;
    sorted[lower] + frac * (sorted[lower + 1] - sorted[lower])
}

fn check_fraction(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(MeistatError::OutOfRange {
            name,
            value,
            range: "[0, 1]",
        })
    }
}

/// Median of all elements, or along `axis`
///
/// Even-length lanes return the mean of the two middle values.
///
/// # Errors
///
/// Returns an error if the array is empty or the axis is invalid.
pub fn median<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    reduce_lanes(x, axis, |lane| Ok(median_sorted(&sorted_lane(lane))))
}

/// Most frequent value
///
/// Values are counted in first-occurrence order and the earliest value with
/// the strictly greatest count wins, so `[1, 2, 2, 1]` gives `1`. `-0.0` and
/// `0.0` are counted as the same value.
///
/// # Errors
///
/// Returns an error if the array is empty.
pub fn mode<S, D>(x: &ArrayBase<S, D>) -> Result<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    // Keyed by bit pattern with -0.0 folded onto 0.0; insertion order is first occurrence
    let mut counts: IndexMap<u64, (f64, usize)> = IndexMap::new();
    for &value in x {
        let key = if value == 0.0 { 0.0_f64.to_bits() } else { value.to_bits() };
        counts.entry(key).or_insert((value, 0)).1 += 1;
    }

    let mut best: Option<(f64, usize)> = None;
    for &(value, count) in counts.values() {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((value, count));
        }
    }

    best.map(|(value, _)| value).ok_or(MeistatError::EmptyInput)
}

/// Quantile `q` of all elements, or along `axis`, by linear interpolation
///
/// `q = 0` is the minimum and `q = 1` the maximum.
///
/// # Errors
///
/// Returns an error if `q` is outside `[0, 1]`, the array is empty, or the axis
/// is invalid.
pub fn quantile<S, D>(x: &ArrayBase<S, D>, q: f64, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    check_fraction("q", q)?;
    reduce_lanes(x, axis, |lane| Ok(quantile_sorted(&sorted_lane(lane), q)))
}

/// Percentile `p` (0 to 100); `quantile(x, p / 100)`
///
/// # Errors
///
/// Returns an error if `p` is outside `[0, 100]`, the array is empty, or the
/// axis is invalid.
pub fn percentile<S, D>(x: &ArrayBase<S, D>, p: f64, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if !(0.0..=100.0).contains(&p) {
        return Err(MeistatError::OutOfRange {
            name: "p",
            value: p,
            range: "[0, 100]",
        });
    }
    quantile(x, p / 100.0, axis)
}

/// First quartile, median and third quartile of all elements
///
/// # Errors
///
/// Returns an error if the array is empty.
pub fn quartiles<S, D>(x: &ArrayBase<S, D>) -> Result<(f64, f64, f64)>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if x.is_empty() {
        return Err(MeistatError::EmptyInput);
    }
    let flat = flatten(x)?;
    let sorted = sorted_lane(flat.view());
    Ok((
        quantile_sorted(&sorted, 0.25),
        quantile_sorted(&sorted, 0.5),
        quantile_sorted(&sorted, 0.75),
    ))
}

/// `max - min` of all elements, or along `axis`
///
/// # Errors
///
/// Returns an error if the array is empty or the axis is invalid.
pub fn range<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let low = min(x, axis)?;
    max(x, axis)?.zip_with(&low, |high, low| high - low)
}

/// Interquartile range `Q3 - Q1`, of all elements or along `axis`
///
/// # Errors
///
/// Returns an error if the array is empty or the axis is invalid.
pub fn iqr<S, D>(x: &ArrayBase<S, D>, axis: Option<usize>) -> Result<Reduced>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    reduce_lanes(x, axis, |lane| {
        let sorted = sorted_lane(lane);
        Ok(quantile_sorted(&sorted, 0.75) - quantile_sorted(&sorted, 0.25))
    })
}
