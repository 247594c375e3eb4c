//! Scenario generator shared by sweeps and surfaces.

use pricer_models::instruments::ScalarParams;

use crate::parallel::ParallelConfig;

/// Builds 1-D sweeps ([`sweep`](Self::sweep)) and 2-D surfaces
/// ([`surface`](Self::surface)) for a strategy.
///
/// The generator holds no market state; every call is a pure function of its
/// arguments. It only decides whether samples run on the Rayon pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScenarioGenerator {
    parallel: ParallelConfig,
}

impl ScenarioGenerator {
    /// Creates a generator with the given parallel configuration.
    pub fn new(parallel: ParallelConfig) -> Self {
        Self { parallel }
    }

    /// Parallel configuration in use.
    #[inline]
    pub fn parallel(&self) -> &ParallelConfig {
        &self.parallel
    }
}

/// Ratio of discount time to volatility time at the base parameters.
///
/// Swept volatility times are scaled by this ratio to obtain the matching
/// discount time. Without a distinct discount time, or with a non-positive
/// volatility time, the ratio is 1.
pub(crate) fn time_ratio(base: &ScalarParams) -> f64 {
    match base.discount_time {
        Some(discount_time) if base.vol_time > 0.0 => discount_time / base.vol_time,
        _ => 1.0,
    }
}
