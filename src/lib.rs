//! meistat: axis-aware statistics over numeric arrays
//!
//! meistat computes descriptive, correlation and normalization statistics over
//! `ndarray` arrays of `f64`. Reductions work over the whole array or along one
//! axis of a 1-D or 2-D array, and every statistic agrees on axis semantics,
//! empty-input handling and degenerate cases.
//!
//! ## Key Features
//!
//! - **Primitive Reductions**: sum, mean, min, max and product over any axis
//! - **Order Statistics**: median, mode, linearly interpolated quantiles, quartiles, IQR
//! - **Dispersion & Shape**: variance with configurable `ddof`, std, CV, SEM, MAD, skewness, kurtosis
//! - **Correlation**: covariance, Pearson, Spearman, Kendall and full covariance/correlation matrices
//! - **Normalization**: z-scores, cumulative sums/products, geometric, harmonic and trimmed means
//!
//! ## Module Organization
//!
//! - [`statistics`]: all statistical functions, grouped by family
//! - [`axis`]: the [`Reduced`] result type and axis broadcasting
//! - [`summary`]: one-call descriptive summary
//! - [`errors`]: centralized error handling
//!
//! ## Usage Examples
//!
//! ```rust
//! use meistat::prelude::*;
//! use ndarray::array;
//!
//! let x = array![3.0, 1.0, 4.0, 1.0, 5.0];
//! assert_eq!(meistat::sum(&x, None).unwrap().scalar(), Some(14.0));
//! assert_eq!(meistat::median(&x, None).unwrap().scalar(), Some(3.0));
//!
//! let m = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
//! let column_means = m.reduce_along(Some(0), StatOperation::Mean).unwrap();
//! assert_eq!(column_means.shape(), &[3]);
//! ```
//!
//! Results of a whole-array reduction are [`Reduced::Scalar`]; reducing along
//! an axis yields [`Reduced::Array`] with that axis removed.

pub mod axis;
pub mod errors;
pub mod statistics;
pub mod summary;

// Direct re-exports for the public API
pub use axis::{expand_along, to_float, Reduced};
pub use errors::{ErrorKind, MeistatError, Result};
pub use statistics::*;
pub use summary::{describe, Summary};

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::axis::Reduced;
    pub use crate::errors::{ErrorKind, MeistatError, Result};
    pub use crate::statistics::{StatOperation, StatisticalReduction};
    pub use crate::summary::Summary;
}
