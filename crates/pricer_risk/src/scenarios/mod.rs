//! Scenario generation over a composed strategy.
//!
//! This module provides:
//! - 1-D sweeps over spot, volatility time, volatility or rate, with named
//!   comparison series and marker interpolation
//! - 2-D spot × time surfaces with breakeven extraction for P&L
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              ScenarioGenerator                │
//! ├──────────────────────────────────────────────┤
//! │  sweep()    - ScenarioSweep, SweepSeries     │
//! │  surface()  - SurfaceResult, breakevens      │
//! └──────────────────────────────────────────────┘
//!                      ↓
//! ┌──────────────────────────────────────────────┐
//! │  StrategyEvaluator  - legs × SweepOverrides  │
//! └──────────────────────────────────────────────┘
//! ```

mod error;
mod generator;
mod surface;
mod sweep;

pub use error::ScenarioError;
pub use generator::ScenarioGenerator;
pub use surface::{SurfacePoint, SurfaceResult, DEFAULT_GRID_SIZE, SURFACE_MIN_TIME};
pub use sweep::{
    FieldSeries, MarkerValue, ScenarioSweep, SeriesData, SweepAxis, SweepSeries,
    DEFAULT_SERIES_NAME, DEFAULT_STEPS,
};
