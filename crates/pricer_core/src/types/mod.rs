//! Parameter, unit, and error types shared by every layer.
//!
//! This module provides:
//! - `param`: [`ParamValue`], a parameter that is either a single number or a
//!   list of comparison values
//! - `time`: [`DayBasis`] for converting between year fractions and day counts,
//!   plus percent helpers
//! - `error`: Structured error types for interpolation and parameter parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`ParamValue`] from `param`
//! - [`DayBasis`], [`to_percent`], [`from_percent`] from `time`
//! - [`InterpolationError`], [`ParamError`] from `error`

pub mod error;
pub mod param;
pub mod time;

pub use error::{InterpolationError, ParamError};
pub use param::ParamValue;
pub use time::{
    from_percent, to_percent, DayBasis, CALENDAR_DAYS_PER_YEAR, TRADING_DAYS_PER_YEAR,
};
