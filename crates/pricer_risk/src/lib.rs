//! # Pricer Risk (L4: Application)
//!
//! Strategy-level evaluation and scenario generation.
//!
//! This crate provides:
//! - Aggregate evaluation of composed legs with P&L against a cost basis
//! - 1-D scenario sweeps with comparison series and marker interpolation
//! - 2-D spot × time surfaces with breakeven contours
//! - Rayon-based parallelisation of sweep and surface samples
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  evaluator/  - leg aggregation, P&L    │
//! │  scenarios/  - sweeps, surfaces        │
//! │  parallel/   - Rayon utilities         │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Black-Scholes Greeks, leg composer     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_models::greeks::GreekKind;
//! use pricer_models::instruments::{OptionParams, Strategy, StrategySelector};
//! use pricer_risk::scenarios::{ScenarioGenerator, SweepAxis};
//!
//! let params = OptionParams::new(100.0, 100.0, 0.25, 0.2, 0.05);
//! let strategy = Strategy::new(StrategySelector::Straddle);
//!
//! let sweep = ScenarioGenerator::default().sweep(&params, &strategy, SweepAxis::Spot, 21, false);
//! assert_eq!(sweep.x_values.len(), 21);
//!
//! // Straddle delta is negative below the strike and positive above it
//! let delta = &sweep.field_series(GreekKind::Delta)[0].data;
//! assert!(delta[0] < 0.0 && delta[20] > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod evaluator;
pub mod parallel;
pub mod scenarios;

// Re-export commonly used types
pub use evaluator::{evaluate, initial_cost, LegContribution, StrategyEvaluator, SweepOverrides};
pub use parallel::{ParallelConfig, DEFAULT_PARALLEL_THRESHOLD};
pub use scenarios::{ScenarioGenerator, ScenarioSweep, SurfaceResult, SweepAxis};
