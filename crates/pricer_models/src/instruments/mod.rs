//! Option legs and multi-leg strategies.
//!
//! This module provides:
//! - [`OptionKind`]: call or put, doubling as long/short direction for strategies
//! - [`LegDefinition`]: one weighted single-option position
//! - [`StrategySelector`] and [`Strategy`]: which structure to build and its modifiers
//! - [`compose_legs`]: expands a strategy into legs
//! - [`OptionParams`] / [`ScalarParams`]: caller-facing and resolved parameter sets
//! - [`InstrumentError`]: errors from parsing names supplied as text

pub mod composer;
pub mod error;
pub mod leg;
pub mod option_kind;
pub mod params;
pub mod strategy;

pub use composer::compose_legs;
pub use error::InstrumentError;
pub use leg::LegDefinition;
pub use option_kind::OptionKind;
pub use params::{OptionParams, ParamField, ScalarParams};
pub use strategy::{Strategy, StrategySelector, DEFAULT_DAY_OFFSET, DEFAULT_WIDTH};
