//! One-call descriptive summary of a sample

use crate::axis::flatten;
use crate::errors::{MeistatError, Result};
use crate::statistics::dispersion::{kurtosis_lane, skewness_lane, variance_lane};
use crate::statistics::order::{median_sorted, quantile_sorted, sorted_lane};
use crate::statistics::primitives::{max_lane, mean_lane, min_lane, sum_lane};
use ndarray::{ArrayBase, Data, Dimension};
use std::fmt;

/// Descriptive statistics of every element of an array
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of elements
    pub count: usize,
    /// Delta degrees of freedom used for `variance` and `std_dev`
    pub ddof: usize,
    /// Sum of all elements
    pub sum: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Variance with `ddof` delta degrees of freedom
    pub variance: f64,
    /// Square root of `variance`
    pub std_dev: f64,
    /// Smallest element
    pub min: f64,
    /// Largest element
    pub max: f64,
    /// `max - min`
    pub range: f64,
    /// First quartile (0.25 quantile)
    pub q1: f64,
    /// Middle value
    pub median: f64,
    /// Third quartile (0.75 quantile)
    pub q3: f64,
    /// `q3 - q1`
    pub iqr: f64,
    /// Third standardized moment
    pub skewness: f64,
    /// Excess kurtosis
    pub kurtosis: f64,
}

/// Summarize all elements of `x`, using `ddof` for the variance
///
/// # Errors
///
/// Returns an error if the array is empty or `ddof >= n`.
pub fn describe<S, D>(x: &ArrayBase<S, D>, ddof: usize) -> Result<Summary>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if x.is_empty() {
        return Err(MeistatError::EmptyInput);
    }
    let flat = flatten(x)?;
    let lane = flat.view();
    let sorted = sorted_lane(lane);

    let variance = variance_lane(lane, ddof)?;
    let min = min_lane(lane)?;
    let max = max_lane(lane)?;
    let q1 = quantile_sorted(&sorted, 0.25);
    let q3 = quantile_sorted(&sorted, 0.75);

    Ok(Summary {
        count: lane.len(),
        ddof,
        sum: sum_lane(lane)?,
        mean: mean_lane(lane)?,
        variance,
        std_dev: variance.sqrt(),
        min,
        max,
        range: max - min,
        q1,
        median: median_sorted(&sorted),
        q3,
        iqr: q3 - q1,
        skewness: skewness_lane(lane)?,
        kurtosis: kurtosis_lane(lane)?,
    })
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary (n = {}, ddof = {})", self.count, self.ddof)?;
        writeln!(f, "================================")?;
        writeln!(f, "   Min:      {}", self.min)?;
        writeln!(f, "   Q1:       {}", self.q1)?;
        writeln!(f, "   Median:   {}", self.median)?;
        writeln!(f, "   Q3:       {}", self.q3)?;
        writeln!(f, "   Max:      {}", self.max)?;
        writeln!(f, "   Mean:     {:.4}", self.mean)?;
        writeln!(f, "   Std Dev:  {:.4}", self.std_dev)?;
        writeln!(f, "   Variance: {:.4}", self.variance)?;
        writeln!(f, "   Skewness: {:.4}", self.skewness)?;
        write!(f, "   Kurtosis: {:.4}", self.kurtosis)
    }
}
