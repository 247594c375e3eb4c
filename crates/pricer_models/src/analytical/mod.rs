//! Analytical pricing for European options.
//!
//! This module provides:
//! - Standard normal CDF/PDF kernel (`distributions`)
//! - Dual-time Black-Scholes-Merton price and first-order Greeks (`black_scholes`)
//! - Second- and third-order Greeks on the same intermediates (`higher_order`)
//! - Degenerate-input warnings (`error`)
//!
//! ## Design Principles
//!
//! - **Never fails**: degenerate inputs are floored, not rejected
//! - **Reproducible digits**: the CDF is a fixed rational approximation

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod higher_order;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, Intermediates, PricingInput, TIME_FLOOR, VOL_FLOOR};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::InputWarning;
pub use higher_order::HigherOrderGreeks;
