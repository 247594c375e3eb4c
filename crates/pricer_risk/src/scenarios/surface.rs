//! Two-dimensional spot × time surfaces with breakeven extraction.

use pricer_core::math::grid::linspace;
use pricer_models::greeks::GreekKind;
use pricer_models::instruments::{OptionParams, Strategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::generator::{time_ratio, ScenarioGenerator};
use super::sweep::spot_range;
use crate::evaluator::{StrategyEvaluator, SweepOverrides};

/// Default number of nodes per surface axis.
pub const DEFAULT_GRID_SIZE: usize = 40;

/// Shortest volatility time on a surface.
pub const SURFACE_MIN_TIME: f64 = 0.1;

/// A surface node `(spot, volatility time, value)`.
pub type SurfacePoint = (f64, f64, f64);

/// Output of a 2-D surface.
///
/// `points` is row-major: every spot for the first time, then every spot for
/// the next time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceResult {
    /// Output field on the z axis
    pub field: GreekKind,
    /// Nodes per axis
    pub grid_size: usize,
    /// Grid nodes
    pub points: Vec<SurfacePoint>,
    /// `(min, max)` spot
    pub spot_range: (f64, f64),
    /// `(min, max)` volatility time
    pub time_range: (f64, f64),
    /// Zero crossings of P&L along each time row; only for the P&L field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakevens: Option<Vec<SurfacePoint>>,
}

impl SurfaceResult {
    /// Nodes of the `j`-th time row, or an empty slice past the last row.
    pub fn row(&self, j: usize) -> &[SurfacePoint] {
        let n = self.grid_size;
        self.points.get(j * n..(j + 1) * n).unwrap_or(&[])
    }

    /// Breakevens lying on the row at volatility time `time`.
    pub fn breakevens_at(&self, time: f64) -> Vec<SurfacePoint> {
        self.breakevens
            .iter()
            .flatten()
            .filter(|p| p.1 == time)
            .copied()
            .collect()
    }
}

impl ScenarioGenerator {
    /// Evaluates `field` over a `grid_size × grid_size` spot × time grid.
    ///
    /// Spot spans `[0.5K, 1.5K]` and volatility time spans
    /// `[0.1, max(1.5·t, 1)]`; the discount time follows at the base ratio.
    /// For [`GreekKind::Pnl`] each row is also scanned for breakevens.
    pub fn surface(
        &self,
        params: &OptionParams,
        strategy: &Strategy,
        field: GreekKind,
        grid_size: usize,
    ) -> SurfaceResult {
        let base = params.base();
        let spot_range = spot_range(base.strike);
        let time_range = (SURFACE_MIN_TIME, (base.vol_time * 1.5).max(1.0));
        let spots = linspace(spot_range.0, spot_range.1, grid_size);
        let times = linspace(time_range.0, time_range.1, grid_size);
        let ratio = time_ratio(&base);

        let evaluator = StrategyEvaluator::new(base, strategy);
        let initial_cost = evaluator.initial_cost();

        let rows = self.parallel().map(&times, grid_size * grid_size, |&t| {
            let overrides = SweepOverrides::default().with_times(t, t * ratio);
            spots
                .iter()
                .map(|&s| {
                    let result = evaluator.evaluate_pnl(&overrides.with_spot(s), initial_cost);
                    (s, t, result.get(field))
                })
                .collect::<Vec<SurfacePoint>>()
        });

        let breakevens = (field == GreekKind::Pnl).then(|| {
            rows.iter()
                .flat_map(|row| row_breakevens(row))
                .collect::<Vec<_>>()
        });

        debug!(
            field = %field,
            grid_size,
            breakevens = breakevens.as_ref().map_or(0, Vec::len),
            "generated surface"
        );

        SurfaceResult {
            field,
            grid_size,
            points: rows.into_iter().flatten().collect(),
            spot_range,
            time_range,
            breakevens,
        }
    }
}

/// Linearly interpolated zero crossings along one time row.
///
/// A crossing is recorded wherever the sign (−1, 0 or +1) changes between
/// adjacent nodes whose values differ.
fn row_breakevens(row: &[SurfacePoint]) -> Vec<SurfacePoint> {
    row.windows(2)
        .filter_map(|pair| {
            let (s0, t, v0) = pair[0];
            let (s1, _, v1) = pair[1];
            if sign(v0) == sign(v1) || v0 == v1 {
                return None;
            }
            Some((s0 + (0.0 - v0) * (s1 - s0) / (v1 - v0), t, 0.0))
        })
        .collect()
}

#[inline]
fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}
