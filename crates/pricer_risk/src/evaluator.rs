//! Aggregate strategy evaluation.
//!
//! A strategy is priced as the quantity-weighted sum of its legs. Every
//! evaluation builds fresh per-leg pricer inputs from the legs, the base
//! parameter set and a [`SweepOverrides`] value; nothing is mutated in place,
//! so evaluations can run on any thread.

use pricer_models::analytical::{BlackScholes, TIME_FLOOR};
use pricer_models::greeks::GreeksResult;
use pricer_models::instruments::{compose_legs, LegDefinition, ScalarParams, Strategy};
use serde::{Deserialize, Serialize};

/// Per-sample substitutions applied on top of the base parameter set.
///
/// Spot replaces the base spot outright. The other fields are applied to each
/// leg as `x + (leg_value - base_value)`, so a leg equal to the base takes the
/// swept value exactly and a far-expiry leg keeps its offset.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{LegDefinition, OptionKind, OptionParams};
/// use pricer_risk::evaluator::SweepOverrides;
///
/// let base = OptionParams::new(100.0, 100.0, 0.25, 0.2, 0.05).base();
/// let far = LegDefinition::new(OptionKind::Call, 1.0, 100.0, 0.35, 0.2, 0.05);
///
/// let moved = SweepOverrides::default().with_times(0.5, 0.5).apply(&far, &base);
/// assert!((moved.vol_time - 0.6).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepOverrides {
    /// Replacement spot
    pub spot: Option<f64>,
    /// Swept volatility time
    pub vol_time: Option<f64>,
    /// Swept discount time
    pub discount_time: Option<f64>,
    /// Swept volatility
    pub volatility: Option<f64>,
    /// Swept rate
    pub rate: Option<f64>,
    /// Force both times of every leg to the floor
    pub expiry: bool,
}

impl SweepOverrides {
    /// Sets the spot and returns self for method chaining.
    #[inline]
    pub fn with_spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets both time bases and returns self for method chaining.
    #[inline]
    pub fn with_times(mut self, vol_time: f64, discount_time: f64) -> Self {
        self.vol_time = Some(vol_time);
        self.discount_time = Some(discount_time);
        self
    }

    /// Sets the volatility and returns self for method chaining.
    #[inline]
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the rate and returns self for method chaining.
    #[inline]
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets expiry mode and returns self for method chaining.
    #[inline]
    pub fn with_expiry(mut self, expiry: bool) -> Self {
        self.expiry = expiry;
        self
    }

    /// The leg as seen by this sample.
    pub fn apply(&self, leg: &LegDefinition, base: &ScalarParams) -> LegDefinition {
        let mut next = *leg;
        next.vol_time = shifted(self.vol_time, leg.vol_time, base.vol_time);
        if let Some(x) = self.discount_time {
            next.discount_time =
                Some(x + (leg.effective_discount_time() - base.effective_discount_time()));
        }
        next.volatility = shifted(self.volatility, leg.volatility, base.volatility);
        next.rate = shifted(self.rate, leg.rate, base.rate);

        if self.expiry {
            next.vol_time = TIME_FLOOR;
            next.discount_time = Some(TIME_FLOOR);
        }
        next
    }
}

#[inline]
fn shifted(value: Option<f64>, leg: f64, base: f64) -> f64 {
    match value {
        Some(x) => x + (leg - base),
        None => leg,
    }
}

/// Sums the quantity-weighted Greeks of `legs` under `overrides`.
///
/// An empty leg list yields all-zero Greeks. The result carries no P&L; see
/// [`GreeksResult::with_pnl`].
pub fn evaluate(
    legs: &[LegDefinition],
    base: &ScalarParams,
    overrides: &SweepOverrides,
) -> GreeksResult {
    let spot = overrides.spot.unwrap_or(base.spot);
    legs.iter()
        .map(|leg| price_leg(&overrides.apply(leg, base), spot, base))
        .sum()
}

/// Aggregate price of `legs` at the unperturbed base parameters.
pub fn initial_cost(legs: &[LegDefinition], base: &ScalarParams) -> f64 {
    evaluate(legs, base, &SweepOverrides::default()).price
}

fn price_leg(leg: &LegDefinition, spot: f64, base: &ScalarParams) -> GreeksResult {
    let input = leg.pricing_input(spot, base.dividend, base.textbook_mode);
    BlackScholes::greeks(&input, leg.kind).scaled(leg.quantity)
}

/// One leg's weighted contribution to the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegContribution {
    /// The leg as priced
    pub leg: LegDefinition,
    /// Greeks multiplied by the leg's signed quantity
    pub greeks: GreeksResult,
}

/// A composed strategy bound to its base parameter set.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyEvaluator {
    base: ScalarParams,
    legs: Vec<LegDefinition>,
}

impl StrategyEvaluator {
    /// Composes the strategy's legs from `base`.
    pub fn new(base: ScalarParams, strategy: &Strategy) -> Self {
        let legs = compose_legs(&base, strategy);
        Self { base, legs }
    }

    /// Wraps an explicit leg list.
    pub fn from_legs(base: ScalarParams, legs: Vec<LegDefinition>) -> Self {
        Self { base, legs }
    }

    /// Base parameter set.
    #[inline]
    pub fn base(&self) -> &ScalarParams {
        &self.base
    }

    /// Composed legs.
    #[inline]
    pub fn legs(&self) -> &[LegDefinition] {
        &self.legs
    }

    /// Aggregate Greeks under `overrides`.
    #[inline]
    pub fn evaluate(&self, overrides: &SweepOverrides) -> GreeksResult {
        evaluate(&self.legs, &self.base, overrides)
    }

    /// Aggregate Greeks with `pnl = price - initial_cost`.
    #[inline]
    pub fn evaluate_pnl(&self, overrides: &SweepOverrides, initial_cost: f64) -> GreeksResult {
        self.evaluate(overrides).with_pnl(initial_cost)
    }

    /// Aggregate price at the base parameters.
    #[inline]
    pub fn initial_cost(&self) -> f64 {
        initial_cost(&self.legs, &self.base)
    }

    /// Per-leg weighted Greeks at the base parameters, in leg order.
    pub fn leg_breakdown(&self) -> Vec<LegContribution> {
        self.legs
            .iter()
            .map(|leg| LegContribution {
                leg: *leg,
                greeks: price_leg(leg, self.base.spot, &self.base),
            })
            .collect()
    }
}
