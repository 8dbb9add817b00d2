//! Pairwise and matrix statistics
//!
//! Two-sample functions flatten both inputs and pair elements by position.
//! Matrix functions treat rows as observations and columns as variables.

use super::dispersion::{degrees_of_freedom, variance_lane};
use super::primitives::mean_lane;
use crate::axis::flatten;
use crate::errors::{MeistatError, Result};
use ndarray::{Array1, Array2, ArrayBase, ArrayView1, Data, Dimension, Ix2};
use std::cmp::Ordering;
use tracing::debug;

fn check_paired<S, D, T, E>(x: &ArrayBase<S, D>, y: &ArrayBase<T, E>) -> Result<()>
where
    S: Data<Elem = f64>,
    D: Dimension,
    T: Data<Elem = f64>,
    E: Dimension,
{
    if x.len() != y.len() {
        return Err(MeistatError::ShapeMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.is_empty() {
        return Err(MeistatError::EmptyInput);
    }
    Ok(())
}

pub(crate) fn covariance_lanes(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>, ddof: usize) -> Result<f64> {
    let n = x.len();
    let divisor = degrees_of_freedom(n, ddof)?;
    let center_x = mean_lane(x)?;
    let center_y = mean_lane(y)?;
    let co_moment = x
        .iter()
        .zip(y.iter())
        .fold(0.0, |acc, (&a, &b)| acc + (a - center_x) * (b - center_y))
        / n as f64;
    Ok(co_moment * n as f64 / divisor)
}

pub(crate) fn pearson_lanes(x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> Result<f64> {
    let var_x = variance_lane(x, 0)?;
    let var_y = variance_lane(y, 0)?;
    let cov = covariance_lanes(x, y, 0)?;

    let denominator = var_x.sqrt() * var_y.sqrt();
    if denominator == 0.0 {
        return Ok(f64::NAN);
    }
    Ok(cov / denominator)
}

/// 1-based rank of each element by its position in a stable sort
///
/// Tied values keep their input order and receive consecutive ranks; ranks
/// are not averaged.
pub(crate) fn sort_ranks(values: ArrayView1<'_, f64>) -> Array1<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = Array1::zeros(values.len());
    for (position, &index) in order.iter().enumerate() {
        ranks[index] = (position + 1) as f64;
    }
    ranks
}

fn sign(value: f64) -> Ordering {
    value.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

/// Covariance of two equal-length samples with `ddof` delta degrees of freedom
///
/// # Errors
///
/// Returns an error if the lengths differ, the inputs are empty, or
/// `ddof >= n`.
pub fn covariance<S, D, T, E>(x: &ArrayBase<S, D>, y: &ArrayBase<T, E>, ddof: usize) -> Result<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
    T: Data<Elem = f64>,
    E: Dimension,
{
    check_paired(x, y)?;
    let (x, y) = (flatten(x)?, flatten(y)?);
    covariance_lanes(x.view(), y.view(), ddof)
}

/// Pearson correlation coefficient
///
/// Returns NaN instead of failing when either sample has zero variance.
///
/// # Errors
///
/// Returns an error if the lengths differ or the inputs are empty.
pub fn pearson<S, D, T, E>(x: &ArrayBase<S, D>, y: &ArrayBase<T, E>) -> Result<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
    T: Data<Elem = f64>,
    E: Dimension,
{
    check_paired(x, y)?;
    let (x, y) = (flatten(x)?, flatten(y)?);
    pearson_lanes(x.view(), y.view())
}

/// Spearman rank correlation: Pearson correlation of the sort-position ranks
///
/// # Errors
///
/// Returns an error if the lengths differ or the inputs are empty.
pub fn spearman<S, D, T, E>(x: &ArrayBase<S, D>, y: &ArrayBase<T, E>) -> Result<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
    T: Data<Elem = f64>,
    E: Dimension,
{
    check_paired(x, y)?;
    let rank_x = sort_ranks(flatten(x)?.view());
    let rank_y = sort_ranks(flatten(y)?.view());
    pearson_lanes(rank_x.view(), rank_y.view())
}

/// Kendall's tau over all pairs of observations
///
/// Pairs tied in either sample count as neither concordant nor discordant but
/// stay in the `n (n - 1) / 2` denominator. A single observation gives NaN.
///
/// # Errors
///
/// Returns an error if the lengths differ or the inputs are empty.
pub fn kendall<S, D, T, E>(x: &ArrayBase<S, D>, y: &ArrayBase<T, E>) -> Result<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
    T: Data<Elem = f64>,
    E: Dimension,
{
    check_paired(x, y)?;
    let (x, y) = (flatten(x)?, flatten(y)?);
    let n = x.len();

    let mut concordant = 0_usize;
    let mut discordant = 0_usize;
    for i in 0..n {
        for j in (i + 1)..n {
            match (sign(x[j] - x[i]), sign(y[j] - y[i])) {
                (Ordering::Equal, _) | (_, Ordering::Equal) => {}
                (dx, dy) if dx == dy => concordant += 1,
                _ => discordant += 1,
            }
        }
    }

    let pairs = (n * (n - 1)) as f64 / 2.0;
    Ok((concordant as f64 - discordant as f64) / pairs)
}

/// Evaluate `kernel` on every pair of columns
///
/// Only the upper triangle is evaluated; every kernel used here gives the same
/// bits for `(i, j)` and `(j, i)`.
fn pairwise_matrix<S, D, F>(x: &ArrayBase<S, D>, kernel: F) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
    F: Fn(ArrayView1<'_, f64>, ArrayView1<'_, f64>) -> Result<f64>,
{
    if x.ndim() != 2 {
        return Err(MeistatError::NotMatrix { ndim: x.ndim() });
    }
    if x.is_empty() {
        return Err(MeistatError::EmptyInput);
    }

    let x = x.view().into_dimensionality::<Ix2>()?;
    let variables = x.ncols();
    debug!(variables, observations = x.nrows(), "building pairwise matrix");

    let mut result = Array2::zeros((variables, variables));
    for i in 0..variables {
        for j in i..variables {
            let value = kernel(x.column(i), x.column(j))?;
            result[[i, j]] = value;
            result[[j, i]] = value;
        }
    }
    Ok(result)
}

/// Covariance matrix of the columns of a 2-D array
///
/// The diagonal holds each column's variance with the same `ddof`.
///
/// # Errors
///
/// Returns an error if the input is not 2-D, is empty, or `ddof >= rows`.
pub fn covariance_matrix<S, D>(x: &ArrayBase<S, D>, ddof: usize) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    pairwise_matrix(x, |a, b| covariance_lanes(a, b, ddof))
}

/// Pearson correlation matrix of the columns of a 2-D array
///
/// The diagonal is 1 for every non-constant column and NaN for constant ones.
///
/// # Errors
///
/// Returns an error if the input is not 2-D or is empty.
pub fn correlation_matrix<S, D>(x: &ArrayBase<S, D>) -> Result<Array2<f64>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    pairwise_matrix(x, pearson_lanes)
}
