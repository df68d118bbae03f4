//! Error types for XmR chart computation
//!
//! Provides a unified error type for all xmr-stats crates.

use thiserror::Error;

/// Core error type for XmR chart operations
#[derive(Error, Debug)]
pub enum Error {
    /// An input element could not be read as a number
    #[error("Invalid numeric input at index {index}: {value:?}")]
    InvalidNumericInput { index: usize, value: String },

    /// Baseline window is reversed or reaches outside the series
    #[error("Invalid baseline window [{start}, {end}) for series of length {len}")]
    InvalidWindow { start: usize, end: usize, len: usize },

    /// Trending central line needs two non-empty halves in the baseline window
    #[error("Insufficient data for trend: baseline window of {window_len} observations cannot be split into two halves")]
    InsufficientDataForTrend { window_len: usize },

    /// Insufficient data for the requested statistic
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A derived quantity does not fit in a decimal
    #[error("Arithmetic overflow in {0}")]
    ArithmeticOverflow(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an unparsable input element
    pub fn invalid_numeric(index: usize, value: impl Into<String>) -> Self {
        Self::InvalidNumericInput {
            index,
            value: value.into(),
        }
    }

    /// Create an error for a bad baseline window
    pub fn invalid_window(start: usize, end: usize, len: usize) -> Self {
        Self::InvalidWindow { start, end, len }
    }

    /// Create an error for sequences that should be aligned index by index
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for a derivation whose result leaves the decimal range
    pub fn overflow(context: &str) -> Self {
        Self::ArithmeticOverflow(context.to_string())
    }

    /// Create an error for an empty statistic input
    pub fn empty_input(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }
}
