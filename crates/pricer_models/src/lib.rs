//! # Pricer Models (L2: Business Logic)
//!
//! Option pricing and strategy composition.
//!
//! This crate provides:
//! - Dual-time Black-Scholes-Merton pricing with first-, second- and
//!   third-order Greeks (`analytical`)
//! - The [`GreeksResult`](greeks::GreeksResult) container and field selector (`greeks`)
//! - Option legs, strategy selectors and the leg composer (`instruments`)
//!
//! ## Design Principles
//!
//! - **Closed enums** for strategy selection, one composer per variant
//! - **Builder pattern** for parameter sets with sensible defaults
//! - **Pure functions**: every result is freshly constructed from its inputs
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::{BlackScholes, PricingInput};
//! use pricer_models::instruments::{compose_legs, OptionParams, Strategy, StrategySelector};
//!
//! let params = OptionParams::new(100.0, 100.0, 0.5, 0.2, 0.0).base();
//! let legs = compose_legs(&params, &Strategy::new(StrategySelector::Straddle));
//!
//! let cost: f64 = legs
//!     .iter()
//!     .map(|leg| leg.quantity * BlackScholes::price(&leg.pricing_input(100.0, 0.0, false), leg.kind))
//!     .sum();
//! assert!(cost > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod greeks;
pub mod instruments;
