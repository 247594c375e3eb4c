//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from interpolator construction
//! - `ParamError`: Errors from parsing parameter values and day bases

use thiserror::Error;

/// Interpolation errors.
///
/// # Examples
/// ```
/// use pricer_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData { got: 1, need: 2 };
/// assert!(format!("{}", err).contains("need at least 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Parameter parsing errors.
///
/// Raised when a textual parameter (command-line flag, environment variable)
/// cannot be turned into a [`ParamValue`](crate::types::ParamValue) or a
/// [`DayBasis`](crate::types::DayBasis).
///
/// # Examples
/// ```
/// use pricer_core::types::ParamError;
///
/// let err = ParamError::InvalidNumber("abc".to_string());
/// assert_eq!(format!("{}", err), "Invalid number: 'abc'");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// The input contained no values.
    #[error("Parameter list is empty")]
    Empty,

    /// A list element was not a valid floating-point number.
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    /// Unknown day basis name.
    #[error("Unknown day basis: '{0}' (expected 'trading' or 'calendar')")]
    UnknownDayBasis(String),
}
