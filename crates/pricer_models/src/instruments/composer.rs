//! Strategy leg composer.
//!
//! Expands a [`Strategy`] and a scalar parameter set into an ordered list of
//! weighted single-option legs. One composer function per selector variant;
//! the dispatch in [`compose_legs`] is an exhaustive match.
//!
//! ## Direction multiplier
//!
//! For every selector except `single`, the caller's option kind doubles as the
//! direction of the whole structure: call means long (`b = +1`), put means
//! short (`b = -1`). Ratio, calendar, diagonal and time-butterfly spreads also
//! use that kind as the kind of their legs, so a "put" ratio spread is a short
//! put ratio spread. `single` is always one long option of the selected kind.
//!
//! ## Far expiry
//!
//! The day offset is applied on both time bases: `offset·252/365` trading days
//! on the volatility time and `offset` calendar days on the discount time.

use pricer_core::types::{DayBasis, CALENDAR_DAYS_PER_YEAR, TRADING_DAYS_PER_YEAR};
use tracing::warn;

use super::leg::LegDefinition;
use super::option_kind::OptionKind;
use super::params::ScalarParams;
use super::strategy::{Strategy, StrategySelector};

/// Expands a strategy into its legs.
///
/// Pure and deterministic. Unrecognised selectors yield an empty list.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{compose_legs, OptionParams, Strategy, StrategySelector};
///
/// let base = OptionParams::new(100.0, 100.0, 0.5, 0.2, 0.05).base();
/// let legs = compose_legs(&base, &Strategy::new(StrategySelector::IronCondor));
///
/// let strikes: Vec<f64> = legs.iter().map(|l| l.strike).collect();
/// assert_eq!(strikes, vec![80.0, 90.0, 110.0, 120.0]);
/// ```
pub fn compose_legs(base: &ScalarParams, strategy: &Strategy) -> Vec<LegDefinition> {
    let ctx = LegTemplate::new(base, strategy);
    match &strategy.selector {
        StrategySelector::Single => single(&ctx),
        StrategySelector::Straddle => straddle(&ctx),
        StrategySelector::Strangle => strangle(&ctx),
        StrategySelector::Butterfly => butterfly(&ctx),
        StrategySelector::IronCondor => iron_condor(&ctx),
        StrategySelector::RatioSpread => ratio_spread(&ctx),
        StrategySelector::CalendarSpread => calendar_spread(&ctx),
        StrategySelector::DiagonalSpread => diagonal_spread(&ctx),
        StrategySelector::TimeButterfly => time_butterfly(&ctx),
        StrategySelector::VerticalCallSpread => vertical_call_spread(&ctx),
        StrategySelector::VerticalPutSpread => vertical_put_spread(&ctx),
        StrategySelector::Custom(legs) => legs.clone(),
        StrategySelector::Unrecognised(name) => {
            warn!(strategy = %name, "unrecognised strategy, composing no legs");
            Vec::new()
        }
    }
}

/// Shared inputs of every composer function.
struct LegTemplate {
    kind: OptionKind,
    b: f64,
    strike: f64,
    width: f64,
    width2: f64,
    near_vol_time: f64,
    near_discount_time: f64,
    far_vol_time: f64,
    far_discount_time: f64,
    volatility: f64,
    rate: f64,
}

impl LegTemplate {
    fn new(base: &ScalarParams, strategy: &Strategy) -> Self {
        let near_discount_time = base.effective_discount_time();
        let trading_offset_days =
            strategy.day_offset * TRADING_DAYS_PER_YEAR / CALENDAR_DAYS_PER_YEAR;

        Self {
            kind: base.kind,
            b: base.kind.direction(),
            strike: base.strike,
            width: strategy.width,
            width2: strategy.secondary_width(),
            near_vol_time: base.vol_time,
            near_discount_time,
            far_vol_time: base.vol_time + DayBasis::Trading.from_days(trading_offset_days),
            far_discount_time: near_discount_time
                + DayBasis::Calendar.from_days(strategy.day_offset),
            volatility: base.volatility,
            rate: base.rate,
        }
    }

    fn near(&self, kind: OptionKind, strike: f64, quantity: f64) -> LegDefinition {
        LegDefinition::new(
            kind,
            quantity,
            strike,
            self.near_vol_time,
            self.volatility,
            self.rate,
        )
        .with_discount_time(self.near_discount_time)
    }

    fn far(&self, kind: OptionKind, strike: f64, quantity: f64) -> LegDefinition {
        LegDefinition::new(
            kind,
            quantity,
            strike,
            self.far_vol_time,
            self.volatility,
            self.rate,
        )
        .with_discount_time(self.far_discount_time)
    }

    /// Strike one width further out-of-the-money for the selected kind.
    fn otm_strike(&self) -> f64 {
        match self.kind {
            OptionKind::Call => self.strike + self.width,
            OptionKind::Put => self.strike - self.width,
        }
    }
}

fn single(t: &LegTemplate) -> Vec<LegDefinition> {
    vec![t.near(t.kind, t.strike, 1.0)]
}

fn straddle(t: &LegTemplate) -> Vec<LegDefinition> {
    vec![
        t.near(OptionKind::Call, t.strike, t.b),
        t.near(OptionKind::Put, t.strike, t.b),
    ]
}

fn strangle(t: &LegTemplate) -> Vec<LegDefinition> {
    vec![
        t.near(OptionKind::Put, t.strike - t.width, t.b),
        t.near(OptionKind::Call, t.strike + t.width, t.b),
    ]
}

fn butterfly(t: &LegTemplate) -> Vec<LegDefinition> {
    vec![
        t.near(OptionKind::Call, t.strike - t.width, t.b),
        t.near(OptionKind::Call, t.strike, -2.0 * t.b),
        t.near(OptionKind::Call, t.strike + t.width2, t.b),
    ]
}

fn iron_condor(t: &LegTemplate) -> Vec<LegDefinition> {
    vec![
        t.near(OptionKind::Put, t.strike - 2.0 * t.width, t.b),
        t.near(OptionKind::Put, t.strike - t.width, -t.b),
        t.near(OptionKind::Call, t.strike + t.width, -t.b),
        t.near(OptionKind::Call, t.strike + 2.0 * t.width, t.b),
    ]
}

fn ratio_spread(t: &LegTemplate) -> Vec<LegDefinition> {
    vec![
        t.near(t.kind, t.strike, t.b),
        t.near(t.kind, t.otm_strike(), -2.0 * t.b),
    ]
}

fn calendar_spread(t: &LegTemplate) -> Vec<LegDefinition> {
    vec![
        t.near(t.kind, t.strike, -t.b),
        t.far(t.kind, t.strike, t.b),
    ]
}

fn diagonal_spread(t: &LegTemplate) -> Vec<LegDefinition> {
    vec![
        t.near(t.kind, t.otm_strike(), -t.b),
        t.far(t.kind, t.strike, t.b),
    ]
}

fn time_butterfly(t: &LegTemplate) -> Vec<LegDefinition> {
    let lower = t.strike - t.width;
    let upper = t.strike + t.width;
    vec![
        t.near(t.kind, lower, -t.b),
        t.far(t.kind, lower, t.b),
        t.near(t.kind, upper, -t.b),
        t.far(t.kind, upper, t.b),
    ]
}

fn vertical_call_spread(t: &LegTemplate) -> Vec<LegDefinition> {
    vec![
        t.near(OptionKind::Call, t.strike, t.b),
        t.near(OptionKind::Call, t.strike + t.width, -t.b),
    ]
}

fn vertical_put_spread(t: &LegTemplate) -> Vec<LegDefinition> {
    vec![
        t.near(OptionKind::Put, t.strike, t.b),
        t.near(OptionKind::Put, t.strike - t.width, -t.b),
    ]
}
