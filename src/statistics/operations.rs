//! Core statistical operations and traits
//!
//! This module defines the operation enum and the extension trait that lets
//! callers pick an axis reduction by value instead of by function name.

use super::order::median;
use super::primitives::{max, mean, min, product, sum};
use crate::axis::Reduced;
use crate::errors::{MeistatError, Result};
use ndarray::{ArrayBase, Data, Dimension};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Supported axis reductions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatOperation {
    /// Sum of values
    Sum,
    /// Arithmetic mean
    Mean,
    /// Minimum value
    Min,
    /// Maximum value
    Max,
    /// Product of values
    Product,
    /// Middle value of the sorted lane
    Median,
}

impl StatOperation {
    /// Every operation, in declaration order
    pub const ALL: [Self; 6] = [
        Self::Sum,
        Self::Mean,
        Self::Min,
        Self::Max,
        Self::Product,
        Self::Median,
    ];

    /// Get the string representation of the operation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Mean => "mean",
            Self::Min => "min",
            Self::Max => "max",
            Self::Product => "product",
            Self::Median => "median",
        }
    }
}

impl fmt::Display for StatOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatOperation {
    type Err = MeistatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MeistatError::UnknownOperation(s.to_string()))
    }
}

/// Trait for arrays that can be reduced by a [`StatOperation`]
pub trait StatisticalReduction {
    /// Perform a statistical reduction over all elements or along `axis`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The array is empty
    /// - The axis is out of bounds, or the array is not 1-D or 2-D when an
    ///   axis is given
    fn reduce_along(&self, axis: Option<usize>, operation: StatOperation) -> Result<Reduced>;
}

impl<S, D> StatisticalReduction for ArrayBase<S, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    fn reduce_along(&self, axis: Option<usize>, operation: StatOperation) -> Result<Reduced> {
        debug!(operation = operation.as_str(), axis = ?axis, shape = ?self.shape(), "dispatching reduction");

        match operation {
            StatOperation::Sum => sum(self, axis),
            StatOperation::Mean => mean(self, axis),
            StatOperation::Min => min(self, axis),
            StatOperation::Max => max(self, axis),
            StatOperation::Product => product(self, axis),
            StatOperation::Median => median(self, axis),
        }
    }
}
