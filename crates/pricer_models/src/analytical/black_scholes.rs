//! Dual-time Black-Scholes-Merton pricer.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-q·τ)·N(d₁) - K·e^(-r·τ)·N(d₂)
//! **Put Price**: P = K·e^(-r·τ)·N(-d₂) - S·e^(-q·τ)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q)·τ + σ²t/2) / (σ√t)
//! - d₂ = d₁ - σ√t
//!
//! ## Dual Time Basis
//!
//! `t` is the volatility time (trading years) and drives the variance term,
//! the d₁/d₂ denominators, gamma and vega. `τ` is the discount time (calendar
//! years) and drives discounting, the dividend factor, rho and the rate and
//! dividend terms of theta. When no discount time is given, `τ = t`.
//!
//! ## Degenerate Inputs
//!
//! `t`, `τ` and `σ` are floored at 1e-4 before use. The caller's input is
//! never modified; [`PricingInput::warnings`] reports each substitution.

use serde::{Deserialize, Serialize};

use super::distributions::{norm_cdf, norm_pdf};
use super::error::InputWarning;
use super::higher_order::HigherOrderGreeks;
use crate::greeks::GreeksResult;
use crate::instruments::OptionKind;
use pricer_core::types::{CALENDAR_DAYS_PER_YEAR, TRADING_DAYS_PER_YEAR};

/// Floor applied to volatility time and discount time.
pub const TIME_FLOOR: f64 = 1e-4;

/// Floor applied to volatility.
pub const VOL_FLOOR: f64 = 1e-4;

/// Single-option pricer input.
///
/// # Examples
/// ```
/// use pricer_models::analytical::PricingInput;
///
/// let input = PricingInput::new(100.0, 100.0, 0.0, 0.2, 0.05);
/// assert_eq!(input.warnings().len(), 2); // volatility time and discount time
/// assert_eq!(input.vol_time, 0.0); // caller value untouched
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInput {
    /// Spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Volatility time in trading years (t)
    pub vol_time: f64,
    /// Discount time in calendar years (τ); defaults to `vol_time`
    pub discount_time: Option<f64>,
    /// Volatility (σ)
    pub volatility: f64,
    /// Risk-free rate (r)
    pub rate: f64,
    /// Continuous dividend yield (q)
    pub dividend: f64,
    /// Weight the volatility-decay term of theta by 1 instead of 252/365
    pub textbook_mode: bool,
}

impl PricingInput {
    /// Creates an input with no separate discount time, zero dividend and
    /// textbook mode off.
    pub fn new(spot: f64, strike: f64, vol_time: f64, volatility: f64, rate: f64) -> Self {
        Self {
            spot,
            strike,
            vol_time,
            discount_time: None,
            volatility,
            rate,
            dividend: 0.0,
            textbook_mode: false,
        }
    }

    /// Sets the discount time and returns self for method chaining.
    #[inline]
    pub fn with_discount_time(mut self, discount_time: f64) -> Self {
        self.discount_time = Some(discount_time);
        self
    }

    /// Sets the dividend yield and returns self for method chaining.
    #[inline]
    pub fn with_dividend(mut self, dividend: f64) -> Self {
        self.dividend = dividend;
        self
    }

    /// Sets textbook mode and returns self for method chaining.
    #[inline]
    pub fn with_textbook_mode(mut self, textbook_mode: bool) -> Self {
        self.textbook_mode = textbook_mode;
        self
    }

    /// Discount time, falling back to the volatility time.
    #[inline]
    pub fn effective_discount_time(&self) -> f64 {
        self.discount_time.unwrap_or(self.vol_time)
    }

    /// Fields the pricer will floor, with the value it uses instead.
    pub fn warnings(&self) -> Vec<InputWarning> {
        let mut warnings = Vec::new();
        let tau = self.effective_discount_time();

        if self.vol_time < TIME_FLOOR {
            warnings.push(InputWarning::VolTimeFloored {
                value: self.vol_time,
                floor: TIME_FLOOR,
            });
        }
        if tau < TIME_FLOOR {
            warnings.push(InputWarning::DiscountTimeFloored {
                value: tau,
                floor: TIME_FLOOR,
            });
        }
        if self.volatility < VOL_FLOOR {
            warnings.push(InputWarning::VolatilityFloored {
                value: self.volatility,
                floor: VOL_FLOOR,
            });
        }
        warnings
    }
}

/// `max(value, floor)` that lets NaN through.
#[inline]
fn floored(value: f64, floor: f64) -> f64 {
    if value < floor {
        floor
    } else {
        value
    }
}

/// Floored inputs and the d₁/d₂ terms shared by all Greeks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intermediates {
    /// Floored volatility time
    pub t: f64,
    /// Floored discount time
    pub tau: f64,
    /// Floored volatility
    pub sigma: f64,
    /// √t
    pub sqrt_t: f64,
    /// d₁
    pub d1: f64,
    /// d₂
    pub d2: f64,
    /// e^(-q·τ)
    pub dividend_factor: f64,
    /// e^(-r·τ)
    pub discount_factor: f64,
    /// φ(d₁)
    pub pdf_d1: f64,
}

impl Intermediates {
    /// Computes the floored intermediates for `input`.
    pub fn new(input: &PricingInput) -> Self {
        let t = floored(input.vol_time, TIME_FLOOR);
        let tau = floored(input.effective_discount_time(), TIME_FLOOR);
        let sigma = floored(input.volatility, VOL_FLOOR);
        let sqrt_t = t.sqrt();
        let r = input.rate;
        let q = input.dividend;

        let d1 = ((input.spot / input.strike).ln() + (r - q) * tau + 0.5 * sigma * sigma * t)
            / (sigma * sqrt_t);
        let d2 = d1 - sigma * sqrt_t;

        Self {
            t,
            tau,
            sigma,
            sqrt_t,
            d1,
            d2,
            dividend_factor: (-q * tau).exp(),
            discount_factor: (-r * tau).exp(),
            pdf_d1: norm_pdf(d1),
        }
    }

    /// σ√t
    #[inline]
    pub fn vol_sqrt_t(&self) -> f64 {
        self.sigma * self.sqrt_t
    }
}

/// Closed-form pricer for European options under the dual-time model.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{BlackScholes, PricingInput};
/// use pricer_models::instruments::OptionKind;
///
/// let input = PricingInput::new(100.0, 100.0, 1.0, 0.2, 0.05);
/// let call = BlackScholes::greeks(&input, OptionKind::Call);
/// let put = BlackScholes::greeks(&input, OptionKind::Put);
///
/// // Put-call parity: C - P = S - K·e^(-rT)
/// let parity = call.price - put.price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-9);
/// ```
pub struct BlackScholes;

impl BlackScholes {
    /// Weight of the volatility-decay term of theta.
    ///
    /// Volatility accrues on trading days while theta is reported per
    /// calendar day, hence 252/365 outside textbook mode.
    #[inline]
    pub fn vol_time_weight(textbook_mode: bool) -> f64 {
        if textbook_mode {
            1.0
        } else {
            TRADING_DAYS_PER_YEAR / CALENDAR_DAYS_PER_YEAR
        }
    }

    /// Theoretical price only.
    #[inline]
    pub fn price(input: &PricingInput, kind: OptionKind) -> f64 {
        let m = Intermediates::new(input);
        let s = input.spot;
        let k = input.strike;
        match kind {
            OptionKind::Call => {
                s * m.dividend_factor * norm_cdf(m.d1) - k * m.discount_factor * norm_cdf(m.d2)
            }
            OptionKind::Put => {
                k * m.discount_factor * norm_cdf(-m.d2) - s * m.dividend_factor * norm_cdf(-m.d1)
            }
        }
    }

    /// Price, first-order and higher-order Greeks of one option.
    ///
    /// Theta is per calendar day, vega and rho per percentage point. `pnl`
    /// is left empty.
    pub fn greeks(input: &PricingInput, kind: OptionKind) -> GreeksResult {
        let m = Intermediates::new(input);
        let s = input.spot;
        let k = input.strike;
        let r = input.rate;
        let q = input.dividend;

        let nd1 = norm_cdf(m.d1);
        let nd2 = norm_cdf(m.d2);
        let nd1_minus = norm_cdf(-m.d1);
        let nd2_minus = norm_cdf(-m.d2);
        let e_qt = m.dividend_factor;
        let e_rt = m.discount_factor;

        let vol_decay = -(s * e_qt * m.pdf_d1 * m.sigma) / (2.0 * m.sqrt_t);
        let weight = Self::vol_time_weight(input.textbook_mode);

        let (price, delta, theta, rho) = match kind {
            OptionKind::Call => {
                let rate_term = -r * k * e_rt * nd2;
                let dividend_term = q * s * e_qt * nd1;
                (
                    s * e_qt * nd1 - k * e_rt * nd2,
                    e_qt * nd1,
                    vol_decay * weight + rate_term + dividend_term,
                    k * m.tau * e_rt * nd2,
                )
            }
            OptionKind::Put => {
                let rate_term = r * k * e_rt * nd2_minus;
                let dividend_term = -q * s * e_qt * nd1_minus;
                (
                    k * e_rt * nd2_minus - s * e_qt * nd1_minus,
                    -e_qt * nd1_minus,
                    vol_decay * weight + rate_term + dividend_term,
                    -k * m.tau * e_rt * nd2_minus,
                )
            }
        };

        let gamma = (e_qt * m.pdf_d1) / (s * m.vol_sqrt_t());
        let vega = s * e_qt * m.pdf_d1 * m.sqrt_t;

        // Higher-order terms consume the unscaled vega and gamma
        let higher = HigherOrderGreeks::compute(input, &m, kind, gamma, vega);

        GreeksResult {
            price,
            delta,
            gamma,
            theta: theta / CALENDAR_DAYS_PER_YEAR,
            vega: vega / 100.0,
            rho: rho / 100.0,
            vanna: higher.vanna,
            charm: higher.charm,
            speed: higher.speed,
            color: higher.color,
            volga: higher.volga,
            zomma: higher.zomma,
            pnl: None,
        }
    }
}
