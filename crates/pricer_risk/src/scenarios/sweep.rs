//! One-dimensional scenario sweeps.
//!
//! A sweep varies one axis (spot, volatility time, volatility or rate) over a
//! heuristic range and evaluates the strategy at every sample. When another
//! field carries a list of values, one named series is produced per value.

use std::fmt;
use std::str::FromStr;

use pricer_core::math::grid::linspace;
use pricer_core::math::interpolators::interpolate_clamped;
use pricer_core::types::{from_percent, to_percent, DayBasis};
use pricer_models::analytical::TIME_FLOOR;
use pricer_models::greeks::{GreekKind, GreeksResult};
use pricer_models::instruments::{OptionParams, ParamField, ScalarParams, Strategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::ScenarioError;
use super::generator::{time_ratio, ScenarioGenerator};
use crate::evaluator::{StrategyEvaluator, SweepOverrides};

/// Default number of samples along a sweep axis.
pub const DEFAULT_STEPS: usize = 50;

/// Name of the single series produced when no field is list-valued.
pub const DEFAULT_SERIES_NAME: &str = "Default";

/// Swept dimension of a 1-D scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepAxis {
    /// Spot price
    Spot,
    /// Volatility time; discount time follows at the base ratio
    VolTime,
    /// Volatility
    Volatility,
    /// Risk-free rate
    Rate,
}

impl SweepAxis {
    /// All sweep axes.
    pub const ALL: [SweepAxis; 4] = [
        SweepAxis::Spot,
        SweepAxis::VolTime,
        SweepAxis::Volatility,
        SweepAxis::Rate,
    ];

    /// The parameter field this axis overrides.
    pub fn field(&self) -> ParamField {
        match self {
            SweepAxis::Spot => ParamField::Spot,
            SweepAxis::VolTime => ParamField::VolTime,
            SweepAxis::Volatility => ParamField::Volatility,
            SweepAxis::Rate => ParamField::Rate,
        }
    }

    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            SweepAxis::Spot => "spot",
            SweepAxis::VolTime => "time",
            SweepAxis::Volatility => "vol",
            SweepAxis::Rate => "rate",
        }
    }

    /// Sample range `(min, max)` for this axis around `base`.
    ///
    /// - spot: `[0.5K, 1.5K]`, or `[50, 150]` when that range is empty
    /// - volatility time: `[TIME_FLOOR, 1]`
    /// - volatility: `[0.05, 1]`
    /// - rate: `[0, max(2r, 0.10)]`
    pub fn range(&self, base: &ScalarParams) -> (f64, f64) {
        match self {
            SweepAxis::Spot => spot_range(base.strike),
            SweepAxis::VolTime => (TIME_FLOOR, 1.0),
            SweepAxis::Volatility => (0.05, 1.0),
            SweepAxis::Rate => (0.0, (base.rate * 2.0).max(0.10)),
        }
    }

    /// Engine value converted to display units (calendar days or percent).
    pub fn to_display(&self, value: f64) -> f64 {
        match self {
            SweepAxis::Spot => value,
            SweepAxis::VolTime => DayBasis::Calendar.to_days(value),
            SweepAxis::Volatility | SweepAxis::Rate => to_percent(value),
        }
    }

    /// Display value converted back to engine units.
    pub fn from_display(&self, value: f64) -> f64 {
        match self {
            SweepAxis::Spot => value,
            SweepAxis::VolTime => DayBasis::Calendar.from_days(value),
            SweepAxis::Volatility | SweepAxis::Rate => from_percent(value),
        }
    }

    /// Overrides for one sample at `x`.
    fn overrides(&self, x: f64, time_ratio: f64, expiry: bool) -> SweepOverrides {
        let overrides = SweepOverrides::default().with_expiry(expiry);
        match self {
            SweepAxis::Spot => overrides.with_spot(x),
            SweepAxis::VolTime => overrides.with_times(x, x * time_ratio),
            SweepAxis::Volatility => overrides.with_volatility(x),
            SweepAxis::Rate => overrides.with_rate(x),
        }
    }
}

impl FromStr for SweepAxis {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spot" | "s" => Ok(SweepAxis::Spot),
            "time" | "t" | "vol_time" | "days" => Ok(SweepAxis::VolTime),
            "vol" | "volatility" | "sigma" => Ok(SweepAxis::Volatility),
            "rate" | "r" => Ok(SweepAxis::Rate),
            _ => Err(ScenarioError::UnknownAxis {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Spot range `[0.5K, 1.5K]`, falling back to `[50, 150]`.
pub(crate) fn spot_range(strike: f64) -> (f64, f64) {
    let (min, max) = (strike * 0.5, strike * 1.5);
    if min < max {
        (min, max)
    } else {
        (50.0, 150.0)
    }
}

/// Aggregate results of one comparison series, one per sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSeries {
    /// Series label, e.g. `σ=20%` or `Default`
    pub name: String,
    /// Greeks (with P&L) at every sample
    pub results: Vec<GreeksResult>,
}

impl SweepSeries {
    /// One field of every sample.
    pub fn values(&self, kind: GreekKind) -> Vec<f64> {
        self.results.iter().map(|r| r.get(kind)).collect()
    }
}

/// A named series of one output field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    /// Series label
    pub name: String,
    /// Field value at every sample
    pub data: Vec<f64>,
}

/// Every series of one output field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSeries {
    /// Output field
    pub field: GreekKind,
    /// One entry per comparison series
    pub series: Vec<SeriesData>,
}

/// Interpolated values of one series at a marker position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerValue {
    /// Series label
    pub name: String,
    /// Every field interpolated at the marker
    pub greeks: GreeksResult,
}

/// Output of a 1-D sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSweep {
    /// Swept axis
    pub axis: SweepAxis,
    /// Sample positions in engine units
    pub x_values: Vec<f64>,
    /// Comparison series in candidate order
    pub series: Vec<SweepSeries>,
}

impl ScenarioSweep {
    /// Sample positions in display units.
    pub fn display_x_values(&self) -> Vec<f64> {
        self.x_values
            .iter()
            .map(|&x| self.axis.to_display(x))
            .collect()
    }

    /// Every series of one output field.
    pub fn field_series(&self, kind: GreekKind) -> Vec<SeriesData> {
        self.series
            .iter()
            .map(|s| SeriesData {
                name: s.name.clone(),
                data: s.values(kind),
            })
            .collect()
    }

    /// Series of every output field, in [`GreekKind::ALL`] order.
    pub fn series_per_field(&self) -> Vec<FieldSeries> {
        GreekKind::ALL
            .iter()
            .map(|&field| FieldSeries {
                field,
                series: self.field_series(field),
            })
            .collect()
    }

    /// Every field of every series linearly interpolated at `x` (engine units).
    ///
    /// Positions outside the sampled range clamp to the end samples.
    pub fn marker(&self, x: f64) -> Vec<MarkerValue> {
        self.series
            .iter()
            .map(|s| MarkerValue {
                name: s.name.clone(),
                greeks: GreeksResult::from_fn(|kind| {
                    interpolate_clamped(x, &self.x_values, &s.values(kind))
                }),
            })
            .collect()
    }
}

impl ScenarioGenerator {
    /// Sweeps `axis` over `steps` samples.
    ///
    /// Every sample carries P&L against the aggregate price of the index-0
    /// parameter set, shared by all series. In `expiry` mode both times of
    /// every leg sit at the floor, giving expiry payoff curves.
    pub fn sweep(
        &self,
        params: &OptionParams,
        strategy: &Strategy,
        axis: SweepAxis,
        steps: usize,
        expiry: bool,
    ) -> ScenarioSweep {
        let base = params.base();
        let (min, max) = axis.range(&base);
        let x_values = linspace(min, max, steps);
        let ratio = time_ratio(&base);
        let initial_cost = StrategyEvaluator::new(base, strategy).initial_cost();
        let comparison = comparison_series(params, axis);

        debug!(
            axis = %axis,
            steps,
            series = comparison.len(),
            min,
            max,
            "generating sweep"
        );

        let evaluations = x_values.len() * comparison.len();
        let series = comparison
            .into_iter()
            .map(|(name, series_params)| {
                let evaluator = StrategyEvaluator::new(series_params, strategy);
                let results = self.parallel().map(&x_values, evaluations, |&x| {
                    evaluator.evaluate_pnl(&axis.overrides(x, ratio, expiry), initial_cost)
                });
                SweepSeries { name, results }
            })
            .collect();

        ScenarioSweep {
            axis,
            x_values,
            series,
        }
    }
}

/// Named scalar parameter sets, one per comparison value.
///
/// The first list-valued field other than the axis field, in
/// [`ParamField::ALL`] order, provides the values. Without one the base set
/// is returned as the single default series.
fn comparison_series(params: &OptionParams, axis: SweepAxis) -> Vec<(String, ScalarParams)> {
    let base = params.base();
    let mut candidates = ParamField::ALL
        .into_iter()
        .filter(|&field| field != axis.field())
        .filter_map(|field| {
            params
                .field(field)
                .comparison_values()
                .map(|values| (field, values))
        });

    let Some((field, values)) = candidates.next() else {
        return vec![(DEFAULT_SERIES_NAME.to_string(), base)];
    };
    let ignored: Vec<ParamField> = candidates.map(|(f, _)| f).collect();
    if !ignored.is_empty() {
        warn!(
            compared = ?field,
            ignored = ?ignored,
            "several fields are list-valued, comparing the first"
        );
    }

    values
        .iter()
        .enumerate()
        .map(|(idx, &value)| {
            let discount_entry = match field {
                ParamField::VolTime => params
                    .discount_time
                    .as_ref()
                    .and_then(|d| d.list_entry(idx)),
                _ => None,
            };
            let mut series_params = base.with(field, value);
            if discount_entry.is_some() {
                series_params.discount_time = discount_entry;
            }
            (series_name(field, value, discount_entry), series_params)
        })
        .collect()
}

/// Label of one comparison series in display units.
fn series_name(field: ParamField, value: f64, discount_time: Option<f64>) -> String {
    match field {
        ParamField::Spot => format!("S={}", value),
        ParamField::Strike => format!("K={}", value),
        ParamField::VolTime => match discount_time {
            Some(d) => format!("t={:.0}d", DayBasis::Calendar.to_days(d)),
            None => format!("t={:.0}d (Trading)", DayBasis::Trading.to_days(value)),
        },
        ParamField::Volatility => format!("σ={:.0}%", to_percent(value)),
        ParamField::Rate => format!("r={:.1}%", to_percent(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::ParamValue;
    use pricer_models::analytical::BlackScholes;
    use pricer_models::instruments::{OptionKind, StrategySelector};

    fn params() -> OptionParams {
        OptionParams::new(100.0, 100.0, 0.25, 0.2, 0.05)
    }

    fn names(sweep: &ScenarioSweep) -> Vec<&str> {
        sweep.series.iter().map(|s| s.name.as_str()).collect()
    }

    // ========================================
    // Axes
    // ========================================

    #[test]
    fn test_axis_ranges() {
        let base = params().base();
        assert_eq!(SweepAxis::Spot.range(&base), (50.0, 150.0));
        assert_eq!(SweepAxis::VolTime.range(&base), (TIME_FLOOR, 1.0));
        assert_eq!(SweepAxis::Volatility.range(&base), (0.05, 1.0));
        assert_eq!(SweepAxis::Rate.range(&base), (0.0, 0.10));

        let high_rate = params().with_rate(0.08).base();
        assert_relative_eq!(SweepAxis::Rate.range(&high_rate).1, 0.16, epsilon = 1e-12);

        let strike_80 = params().with_strike(80.0).base();
        assert_eq!(SweepAxis::Spot.range(&strike_80), (40.0, 120.0));
    }

    #[test]
    fn test_spot_range_falls_back_for_degenerate_strike() {
        assert_eq!(spot_range(0.0), (50.0, 150.0));
        assert_eq!(spot_range(-10.0), (50.0, 150.0));
        assert_eq!(spot_range(f64::NAN), (50.0, 150.0));
    }

    #[test]
    fn test_axis_from_str() {
        assert_eq!("spot".parse::<SweepAxis>().unwrap(), SweepAxis::Spot);
        assert_eq!("Time".parse::<SweepAxis>().unwrap(), SweepAxis::VolTime);
        assert_eq!("sigma".parse::<SweepAxis>().unwrap(), SweepAxis::Volatility);
        assert_eq!("r".parse::<SweepAxis>().unwrap(), SweepAxis::Rate);
        assert!("strike".parse::<SweepAxis>().is_err());
        for axis in SweepAxis::ALL {
            assert_eq!(axis.to_string().parse::<SweepAxis>().unwrap(), axis);
        }
    }

    #[test]
    fn test_display_units() {
        assert_relative_eq!(SweepAxis::VolTime.to_display(30.0 / 365.0), 30.0, epsilon = 1e-9);
        assert_relative_eq!(SweepAxis::Volatility.to_display(0.25), 25.0, epsilon = 1e-12);
        assert_relative_eq!(SweepAxis::Rate.from_display(5.0), 0.05, epsilon = 1e-12);
        assert_eq!(SweepAxis::Spot.from_display(95.0), 95.0);
    }

    // ========================================
    // Series naming
    // ========================================

    #[test]
    fn test_single_default_series() {
        let sweep = ScenarioGenerator::default().sweep(
            &params(),
            &Strategy::default(),
            SweepAxis::Spot,
            11,
            false,
        );
        assert_eq!(sweep.x_values.len(), 11);
        assert_eq!(names(&sweep), vec![DEFAULT_SERIES_NAME]);
        assert_eq!(sweep.series[0].results.len(), 11);
    }

    #[test]
    fn test_series_names_in_display_units() {
        let generator = ScenarioGenerator::default();
        let strategy = Strategy::default();

        let vol = params().with_volatility(vec![0.15, 0.25]);
        let sweep = generator.sweep(&vol, &strategy, SweepAxis::Spot, 5, false);
        assert_eq!(names(&sweep), vec!["σ=15%", "σ=25%"]);

        let rate = params().with_rate(vec![0.01, 0.025]);
        let sweep = generator.sweep(&rate, &strategy, SweepAxis::Spot, 5, false);
        assert_eq!(names(&sweep), vec!["r=1.0%", "r=2.5%"]);

        let strike = params().with_strike(vec![95.0, 102.5]);
        let sweep = generator.sweep(&strike, &strategy, SweepAxis::Volatility, 5, false);
        assert_eq!(names(&sweep), vec!["K=95", "K=102.5"]);

        let spot = params().with_spot(vec![90.0, 110.0]);
        let sweep = generator.sweep(&spot, &strategy, SweepAxis::Rate, 5, false);
        assert_eq!(names(&sweep), vec!["S=90", "S=110"]);
    }

    #[test]
    fn test_time_series_names() {
        let generator = ScenarioGenerator::default();
        let strategy = Strategy::default();

        let trading = params().with_vol_time(vec![21.0 / 252.0, 63.0 / 252.0]);
        let sweep = generator.sweep(&trading, &strategy, SweepAxis::Spot, 5, false);
        assert_eq!(names(&sweep), vec!["t=21d (Trading)", "t=63d (Trading)"]);

        let dual = trading.with_discount_time(vec![30.0 / 365.0, 90.0 / 365.0]);
        let sweep = generator.sweep(&dual, &strategy, SweepAxis::Spot, 5, false);
        assert_eq!(names(&sweep), vec!["t=30d", "t=90d"]);
    }

    #[test]
    fn test_axis_field_is_not_compared() {
        let spot = params().with_spot(vec![90.0, 110.0]);
        let sweep = ScenarioGenerator::default().sweep(
            &spot,
            &Strategy::default(),
            SweepAxis::Spot,
            5,
            false,
        );
        assert_eq!(names(&sweep), vec![DEFAULT_SERIES_NAME]);
    }

    #[test]
    fn test_first_list_valued_field_wins() {
        let both = params()
            .with_strike(vec![95.0, 105.0])
            .with_volatility(vec![0.1, 0.2, 0.3]);
        let sweep = ScenarioGenerator::default().sweep(
            &both,
            &Strategy::default(),
            SweepAxis::Spot,
            5,
            false,
        );
        assert_eq!(names(&sweep), vec!["K=95", "K=105"]);
    }

    #[test]
    fn test_single_entry_list_is_not_compared() {
        let one = params().with_volatility(ParamValue::Vector(vec![0.3]));
        let sweep = ScenarioGenerator::default().sweep(
            &one,
            &Strategy::default(),
            SweepAxis::Spot,
            5,
            false,
        );
        assert_eq!(names(&sweep), vec![DEFAULT_SERIES_NAME]);
    }

    // ========================================
    // Sample semantics
    // ========================================

    #[test]
    fn test_time_axis_keeps_discount_ratio() {
        let dual = params().with_vol_time(0.2).with_discount_time(0.3);
        let sweep = ScenarioGenerator::default().sweep(
            &dual,
            &Strategy::default(),
            SweepAxis::VolTime,
            9,
            false,
        );

        for (x, result) in sweep.x_values.iter().zip(&sweep.series[0].results) {
            let direct = BlackScholes::price(
                &pricer_models::analytical::PricingInput::new(100.0, 100.0, *x, 0.2, 0.05)
                    .with_discount_time(x * 1.5),
                OptionKind::Call,
            );
            assert_relative_eq!(result.price, direct, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_cost_basis_shared_across_series() {
        let vol = params().with_volatility(vec![0.2, 0.4]);
        let sweep = ScenarioGenerator::default().sweep(
            &vol,
            &Strategy::new(StrategySelector::Straddle),
            SweepAxis::Spot,
            101,
            false,
        );

        // x[50] is the base spot of 100
        assert_relative_eq!(sweep.x_values[50], 100.0, epsilon = 1e-9);
        let first = sweep.series[0].results[50];
        let second = sweep.series[1].results[50];
        assert_relative_eq!(first.pnl.unwrap(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(second.pnl.unwrap(), second.price - first.price, epsilon = 1e-9);
        assert!(second.pnl.unwrap() > 0.0);
    }

    #[test]
    fn test_expiry_mode_tracks_intrinsic_value() {
        let sweep = ScenarioGenerator::default().sweep(
            &params(),
            &Strategy::default(),
            SweepAxis::Spot,
            41,
            true,
        );
        for (x, result) in sweep.x_values.iter().zip(&sweep.series[0].results) {
            if (x - 100.0).abs() > 5.0 {
                assert_relative_eq!(result.price, (x - 100.0).max(0.0), epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn test_zero_steps_is_empty() {
        let sweep = ScenarioGenerator::default().sweep(
            &params(),
            &Strategy::default(),
            SweepAxis::Rate,
            0,
            false,
        );
        assert!(sweep.x_values.is_empty());
        assert!(sweep.series[0].results.is_empty());
        assert!(sweep.marker(0.05)[0].greeks.price.is_nan());
    }

    // ========================================
    // Marker
    // ========================================

    #[test]
    fn test_marker_on_and_between_nodes() {
        let sweep = ScenarioGenerator::default().sweep(
            &params(),
            &Strategy::default(),
            SweepAxis::Spot,
            11,
            false,
        );
        let prices = sweep.series[0].values(GreekKind::Price);

        let on_node = &sweep.marker(sweep.x_values[3])[0];
        assert_eq!(on_node.name, DEFAULT_SERIES_NAME);
        assert_relative_eq!(on_node.greeks.price, prices[3], epsilon = 1e-12);

        let mid = (sweep.x_values[3] + sweep.x_values[4]) / 2.0;
        let between = &sweep.marker(mid)[0];
        assert_relative_eq!(between.greeks.price, (prices[3] + prices[4]) / 2.0, epsilon = 1e-9);

        let below = &sweep.marker(0.0)[0];
        assert_relative_eq!(below.greeks.price, prices[0], epsilon = 1e-12);
        assert!(below.greeks.pnl.is_some());
    }

    #[test]
    fn test_series_per_field_covers_every_greek() {
        let sweep = ScenarioGenerator::default().sweep(
            &params().with_volatility(vec![0.1, 0.2]),
            &Strategy::default(),
            SweepAxis::Spot,
            7,
            false,
        );
        let per_field = sweep.series_per_field();
        assert_eq!(per_field.len(), GreekKind::ALL.len());
        for field in &per_field {
            assert_eq!(field.series.len(), 2);
            assert_eq!(field.series[0].data.len(), 7);
        }
    }
}
