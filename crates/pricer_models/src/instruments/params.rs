//! Caller-facing parameter sets.
//!
//! [`OptionParams`] is what collaborators supply: every numeric market field
//! may be a scalar or a short list ([`ParamValue`]). [`ScalarParams`] is the
//! resolved single-valued view the composer and evaluator work on.

use pricer_core::types::ParamValue;
use serde::{Deserialize, Serialize};

use super::option_kind::OptionKind;

/// A scalar field of [`ScalarParams`] that may be swept or compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamField {
    /// Spot price
    Spot,
    /// Strike price
    Strike,
    /// Volatility time (trading-year fraction)
    VolTime,
    /// Volatility (decimal)
    Volatility,
    /// Risk-free rate (decimal)
    Rate,
}

impl ParamField {
    /// Every field, in comparison-series priority order.
    pub const ALL: [ParamField; 5] = [
        ParamField::Spot,
        ParamField::Strike,
        ParamField::VolTime,
        ParamField::Volatility,
        ParamField::Rate,
    ];
}

/// Caller-facing parameter set whose market fields are scalar or list valued.
///
/// # Examples
/// ```
/// use pricer_core::types::ParamValue;
/// use pricer_models::instruments::{OptionKind, OptionParams};
///
/// let params = OptionParams::new(100.0, 100.0, 0.25, 0.2, 0.05)
///     .with_volatility(ParamValue::from(vec![0.15, 0.25]))
///     .with_kind(OptionKind::Put);
///
/// let base = params.base();
/// assert_eq!(base.volatility, 0.15);
/// assert_eq!(base.discount_time, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionParams {
    /// Spot price
    pub spot: ParamValue,
    /// Strike price
    pub strike: ParamValue,
    /// Volatility time in trading years
    pub vol_time: ParamValue,
    /// Discount time in calendar years; defaults to `vol_time` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_time: Option<ParamValue>,
    /// Volatility (decimal)
    pub volatility: ParamValue,
    /// Risk-free rate (decimal)
    pub rate: ParamValue,
    /// Continuous dividend yield (decimal)
    pub dividend: f64,
    /// Option kind for `single`; long/short direction otherwise
    pub kind: OptionKind,
    /// Theta without the trading/calendar day-count weight
    pub textbook_mode: bool,
}

impl Default for OptionParams {
    /// At-the-money call on 100 with 30 trading days, 20% volatility and a 5% rate.
    fn default() -> Self {
        Self::new(100.0, 100.0, 30.0 / 252.0, 0.2, 0.05)
    }
}

impl OptionParams {
    /// Creates a scalar parameter set with zero dividend, call kind and
    /// market (non-textbook) mode.
    pub fn new(spot: f64, strike: f64, vol_time: f64, volatility: f64, rate: f64) -> Self {
        Self {
            spot: spot.into(),
            strike: strike.into(),
            vol_time: vol_time.into(),
            discount_time: None,
            volatility: volatility.into(),
            rate: rate.into(),
            dividend: 0.0,
            kind: OptionKind::Call,
            textbook_mode: false,
        }
    }

    /// Sets the spot value(s).
    pub fn with_spot(mut self, spot: impl Into<ParamValue>) -> Self {
        self.spot = spot.into();
        self
    }

    /// Sets the strike value(s).
    pub fn with_strike(mut self, strike: impl Into<ParamValue>) -> Self {
        self.strike = strike.into();
        self
    }

    /// Sets the volatility time value(s).
    pub fn with_vol_time(mut self, vol_time: impl Into<ParamValue>) -> Self {
        self.vol_time = vol_time.into();
        self
    }

    /// Sets the discount time value(s).
    pub fn with_discount_time(mut self, discount_time: impl Into<ParamValue>) -> Self {
        self.discount_time = Some(discount_time.into());
        self
    }

    /// Sets the volatility value(s).
    pub fn with_volatility(mut self, volatility: impl Into<ParamValue>) -> Self {
        self.volatility = volatility.into();
        self
    }

    /// Sets the rate value(s).
    pub fn with_rate(mut self, rate: impl Into<ParamValue>) -> Self {
        self.rate = rate.into();
        self
    }

    /// Sets the dividend yield.
    pub fn with_dividend(mut self, dividend: f64) -> Self {
        self.dividend = dividend;
        self
    }

    /// Sets the option kind / direction.
    pub fn with_kind(mut self, kind: OptionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Enables or disables textbook mode.
    pub fn with_textbook_mode(mut self, textbook_mode: bool) -> Self {
        self.textbook_mode = textbook_mode;
        self
    }

    /// The list-or-scalar value of a comparable field.
    pub fn field(&self, field: ParamField) -> &ParamValue {
        match field {
            ParamField::Spot => &self.spot,
            ParamField::Strike => &self.strike,
            ParamField::VolTime => &self.vol_time,
            ParamField::Volatility => &self.volatility,
            ParamField::Rate => &self.rate,
        }
    }

    /// Scalar view: index 0 of every list-valued field.
    pub fn base(&self) -> ScalarParams {
        ScalarParams {
            spot: self.spot.as_scalar(),
            strike: self.strike.as_scalar(),
            vol_time: self.vol_time.as_scalar(),
            discount_time: self.discount_time.as_ref().map(ParamValue::as_scalar),
            volatility: self.volatility.as_scalar(),
            rate: self.rate.as_scalar(),
            dividend: self.dividend,
            kind: self.kind,
            textbook_mode: self.textbook_mode,
        }
    }
}

/// Single-valued parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarParams {
    /// Spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Volatility time in trading years
    pub vol_time: f64,
    /// Discount time in calendar years, when distinct from `vol_time`
    pub discount_time: Option<f64>,
    /// Volatility (decimal)
    pub volatility: f64,
    /// Risk-free rate (decimal)
    pub rate: f64,
    /// Continuous dividend yield (decimal)
    pub dividend: f64,
    /// Option kind / strategy direction
    pub kind: OptionKind,
    /// Theta without the day-count weight
    pub textbook_mode: bool,
}

impl ScalarParams {
    /// Discount time, falling back to the volatility time.
    #[inline]
    pub fn effective_discount_time(&self) -> f64 {
        self.discount_time.unwrap_or(self.vol_time)
    }

    /// Value of a comparable field.
    #[inline]
    pub fn get(&self, field: ParamField) -> f64 {
        match field {
            ParamField::Spot => self.spot,
            ParamField::Strike => self.strike,
            ParamField::VolTime => self.vol_time,
            ParamField::Volatility => self.volatility,
            ParamField::Rate => self.rate,
        }
    }

    /// Copy with one field replaced.
    #[inline]
    pub fn with(&self, field: ParamField, value: f64) -> Self {
        let mut next = *self;
        match field {
            ParamField::Spot => next.spot = value,
            ParamField::Strike => next.strike = value,
            ParamField::VolTime => next.vol_time = value,
            ParamField::Volatility => next.volatility = value,
            ParamField::Rate => next.rate = value,
        }
        next
    }
}
