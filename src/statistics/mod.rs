//! Statistical computations over numeric arrays
//!
//! Every function takes an `ndarray` array of `f64` and, where it makes sense,
//! an optional axis.
//!
//! # Organization
//!
//! This module is organized into submodules:
//! - [`primitives`]: sum, mean, min, max and product; every other statistic reduces through these
//! - [`order`]: median, mode, quantiles, range and IQR
//! - [`dispersion`]: variance, standard deviation and shape statistics
//! - [`correlation`]: covariance, correlation and rank correlation, plus their matrices
//! - [`normalization`]: z-scores, cumulative transforms and alternative means
//! - [`operations`]: operation enum and the reduction extension trait

pub mod correlation;
pub mod dispersion;
pub mod normalization;
pub mod operations;
pub mod order;
pub mod primitives;

// Re-export the main types and functions for convenience
pub use correlation::{correlation_matrix, covariance, covariance_matrix, kendall, pearson, spearman};
pub use dispersion::{cv, dispersion, kurtosis, mad, sem, skewness, std_dev};
pub use normalization::{
    cumulative_product, cumulative_sum, geometric_mean, harmonic_mean, trimmed_mean, zscore,
};
pub use operations::{StatOperation, StatisticalReduction};
pub use order::{iqr, median, mode, percentile, quantile, quartiles, range};
pub use primitives::{max, mean, min, product, sum};
