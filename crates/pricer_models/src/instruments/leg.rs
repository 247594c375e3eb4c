//! Single-option legs of a strategy.

use std::fmt;

use pricer_core::types::{to_percent, DayBasis};
use serde::{Deserialize, Serialize};

use super::option_kind::OptionKind;
use crate::analytical::PricingInput;

/// One weighted single-option position inside a strategy.
///
/// Spot, dividend yield and textbook mode are shared by the whole strategy and
/// are supplied when the leg is priced.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{LegDefinition, OptionKind};
///
/// let leg = LegDefinition::new(OptionKind::Call, 1.0, 100.0, 30.0 / 252.0, 0.2, 0.05)
///     .with_discount_time(30.0 / 252.0);
/// assert!((leg.trading_days() - 30.0).abs() < 1e-9);
/// assert_eq!(
///     leg.to_string(),
///     "+1 call K=100.00 T=30.0d(trading)/43.5d(calendar) σ=20.00% r=5.00%"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegDefinition {
    /// Call or put
    pub kind: OptionKind,
    /// Signed quantity: positive long, negative short
    pub quantity: f64,
    /// Strike price
    pub strike: f64,
    /// Volatility time in trading years
    pub vol_time: f64,
    /// Discount time in calendar years; defaults to `vol_time` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_time: Option<f64>,
    /// Volatility (decimal)
    pub volatility: f64,
    /// Risk-free rate (decimal)
    pub rate: f64,
}

impl LegDefinition {
    /// Creates a leg priced on a single time basis.
    pub fn new(
        kind: OptionKind,
        quantity: f64,
        strike: f64,
        vol_time: f64,
        volatility: f64,
        rate: f64,
    ) -> Self {
        Self {
            kind,
            quantity,
            strike,
            vol_time,
            discount_time: None,
            volatility,
            rate,
        }
    }

    /// Sets the discount time and returns self for method chaining.
    #[inline]
    pub fn with_discount_time(mut self, discount_time: f64) -> Self {
        self.discount_time = Some(discount_time);
        self
    }

    /// Discount time, falling back to the volatility time.
    #[inline]
    pub fn effective_discount_time(&self) -> f64 {
        self.discount_time.unwrap_or(self.vol_time)
    }

    /// Tenor in trading days.
    #[inline]
    pub fn trading_days(&self) -> f64 {
        DayBasis::Trading.to_days(self.vol_time)
    }

    /// Tenor in calendar days, from the discount time.
    #[inline]
    pub fn calendar_days(&self) -> f64 {
        DayBasis::Calendar.to_days(self.effective_discount_time())
    }

    /// Pricer input for this leg at the given market state.
    pub fn pricing_input(&self, spot: f64, dividend: f64, textbook_mode: bool) -> PricingInput {
        PricingInput {
            spot,
            strike: self.strike,
            vol_time: self.vol_time,
            discount_time: Some(self.effective_discount_time()),
            volatility: self.volatility,
            rate: self.rate,
            dividend,
            textbook_mode,
        }
    }
}

impl fmt::Display for LegDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:+} {} K={:.2} T={:.1}d(trading)/{:.1}d(calendar) σ={:.2}% r={:.2}%",
            self.quantity,
            self.kind,
            self.strike,
            self.trading_days(),
            self.calendar_days(),
            to_percent(self.volatility),
            to_percent(self.rate)
        )
    }
}
