//! Centralized error handling for meistat
//!
//! Every fallible operation in the crate returns [`Result`], so callers can
//! match on a single error type and use [`MeistatError::kind`] to group
//! failures by category.

use thiserror::Error;

/// Main error type for meistat operations
#[derive(Debug, Error)]
pub enum MeistatError {
    /// The array, or one of the slices being reduced, has no elements
    #[error("Empty array: reduction requires at least one element")]
    EmptyInput,

    /// Two samples that must be paired have different lengths
    #[error("Shape mismatch: x has {left} elements but y has {right}")]
    ShapeMismatch { left: usize, right: usize },

    /// A matrix statistic was given something other than a 2-D array
    #[error("Input must be 2-dimensional, got {ndim} dimension(s)")]
    NotMatrix { ndim: usize },

    /// Axis index is not a dimension of the input
    #[error("Axis {axis} is out of bounds for array with {ndim} dimensions")]
    AxisOutOfBounds { axis: usize, ndim: usize },

    /// Axis reductions only work on 1-D and 2-D arrays
    #[error("Axis reductions require a 1- or 2-dimensional array, got {ndim} dimension(s)")]
    UnsupportedDimensions { ndim: usize },

    /// `n - ddof` is not positive
    #[error("ddof = {ddof} leaves no degrees of freedom for {n} observation(s)")]
    InvalidDdof { n: usize, ddof: usize },

    /// A value that must be strictly positive is not
    #[error("All values must be positive for {function}, found {value}")]
    NonPositiveValue { function: &'static str, value: f64 },

    /// A value that must be non-zero is zero
    #[error("Values cannot be zero for {function}")]
    ZeroValue { function: &'static str },

    /// A scalar parameter is outside its valid interval
    #[error("{name} must lie in {range}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        range: &'static str,
    },

    /// Operation name could not be parsed
    #[error("Unknown statistical operation '{0}'")]
    UnknownOperation(String),

    /// Array shape or dimension error
    #[error("Array error: {0}")]
    ArrayError(#[from] ndarray::ShapeError),
}

/// Broad error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Nothing to reduce
    EmptyInput,
    /// Inputs do not have the shapes the operation needs
    ShapeMismatch,
    /// Values or parameters outside the operation's domain
    Domain,
    /// Malformed request that is not about the data itself
    InvalidArgument,
}

impl MeistatError {
    /// Category of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::ShapeMismatch { .. }
            | Self::NotMatrix { .. }
            | Self::AxisOutOfBounds { .. }
            | Self::UnsupportedDimensions { .. }
            | Self::ArrayError(_) => ErrorKind::ShapeMismatch,
            Self::InvalidDdof { .. }
            | Self::NonPositiveValue { .. }
            | Self::ZeroValue { .. }
            | Self::OutOfRange { .. } => ErrorKind::Domain,
            Self::UnknownOperation(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// Result type alias for meistat operations
pub type Result<T> = std::result::Result<T, MeistatError>;
