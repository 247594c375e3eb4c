//! Degenerate-input warnings for analytical pricing.
//!
//! The pricer never rejects an input. Fields that would make the closed-form
//! formulas divide by zero are floored internally; [`InputWarning`] reports
//! each such substitution so a caller can surface it next to the (unchanged)
//! numeric result.

use thiserror::Error;

/// A field of a [`PricingInput`](super::PricingInput) that the pricer floors.
///
/// # Examples
/// ```
/// use pricer_models::analytical::InputWarning;
///
/// let w = InputWarning::VolatilityFloored { value: 0.0, floor: 1e-4 };
/// assert!(format!("{}", w).contains("volatility"));
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum InputWarning {
    /// Volatility time at or below zero (or below the floor).
    #[error("volatility time {value} below floor, priced at {floor}")]
    VolTimeFloored {
        /// The value supplied by the caller
        value: f64,
        /// The value used by the pricer
        floor: f64,
    },

    /// Discount time at or below zero (or below the floor).
    #[error("discount time {value} below floor, priced at {floor}")]
    DiscountTimeFloored {
        /// The value supplied by the caller
        value: f64,
        /// The value used by the pricer
        floor: f64,
    },

    /// Volatility at or below zero (or below the floor).
    #[error("volatility {value} below floor, priced at {floor}")]
    VolatilityFloored {
        /// The value supplied by the caller
        value: f64,
        /// The value used by the pricer
        floor: f64,
    },
}
