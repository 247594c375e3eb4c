//! Greeks calculation result type.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use super::GreekKind;

/// Price and sensitivities of one option or of a weighted sum of legs.
///
/// Units: `theta` per calendar day, `vega` per one volatility point and `rho`
/// per one rate point. Every other field is in raw model units.
///
/// `pnl` is populated only by P&L-aware evaluators; every other field is
/// always present.
///
/// # First-Order Greeks
///
/// - `delta`: ∂V/∂S
/// - `vega`: ∂V/∂σ
/// - `theta`: ∂V/∂t
/// - `rho`: ∂V/∂r
///
/// # Second-Order Greeks
///
/// - `gamma`: ∂²V/∂S²
/// - `vanna`: ∂²V/∂S∂σ
/// - `charm`: ∂²V/∂S∂t
/// - `volga`: ∂²V/∂σ²
///
/// # Third-Order Greeks
///
/// - `speed`: ∂³V/∂S³
/// - `color`: ∂³V/∂S²∂t
/// - `zomma`: ∂³V/∂S²∂σ
///
/// # Examples
///
/// ```rust
/// use pricer_models::greeks::{GreekKind, GreeksResult};
///
/// let call = GreeksResult { price: 10.0, delta: 0.6, ..Default::default() };
/// let put = GreeksResult { price: 5.0, delta: -0.4, ..Default::default() };
///
/// // Long one call, short two puts
/// let mut total = call.scaled(1.0);
/// total += put.scaled(-2.0);
/// assert_eq!(total.price, 0.0);
/// assert!((total.get(GreekKind::Delta) - 1.4).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GreeksResult {
    /// Theoretical value.
    pub price: f64,
    /// Delta: ∂V/∂S.
    pub delta: f64,
    /// Gamma: ∂²V/∂S².
    pub gamma: f64,
    /// Theta per calendar day.
    pub theta: f64,
    /// Vega per one volatility point.
    pub vega: f64,
    /// Rho per one rate point.
    pub rho: f64,
    /// Vanna: ∂²V/∂S∂σ.
    pub vanna: f64,
    /// Charm: delta decay.
    pub charm: f64,
    /// Speed: ∂³V/∂S³.
    pub speed: f64,
    /// Color: gamma decay.
    pub color: f64,
    /// Volga (vomma): ∂²V/∂σ².
    pub volga: f64,
    /// Zomma: ∂³V/∂S²∂σ.
    pub zomma: f64,
    /// Price minus the initial cost, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pnl: Option<f64>,
}

impl GreeksResult {
    /// All-zero result without P&L.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds a result by evaluating `f` for every field (P&L included).
    pub fn from_fn(mut f: impl FnMut(GreekKind) -> f64) -> Self {
        let mut result = Self::zero();
        for kind in GreekKind::ALL {
            result.set(kind, f(kind));
        }
        result
    }

    /// Value of one field. An absent P&L reads as NaN.
    #[inline]
    pub fn get(&self, kind: GreekKind) -> f64 {
        match kind {
            GreekKind::Price => self.price,
            GreekKind::Delta => self.delta,
            GreekKind::Gamma => self.gamma,
            GreekKind::Theta => self.theta,
            GreekKind::Vega => self.vega,
            GreekKind::Rho => self.rho,
            GreekKind::Vanna => self.vanna,
            GreekKind::Charm => self.charm,
            GreekKind::Speed => self.speed,
            GreekKind::Color => self.color,
            GreekKind::Volga => self.volga,
            GreekKind::Zomma => self.zomma,
            GreekKind::Pnl => self.pnl.unwrap_or(f64::NAN),
        }
    }

    /// Overwrites one field.
    #[inline]
    pub fn set(&mut self, kind: GreekKind, value: f64) {
        match kind {
            GreekKind::Price => self.price = value,
            GreekKind::Delta => self.delta = value,
            GreekKind::Gamma => self.gamma = value,
            GreekKind::Theta => self.theta = value,
            GreekKind::Vega => self.vega = value,
            GreekKind::Rho => self.rho = value,
            GreekKind::Vanna => self.vanna = value,
            GreekKind::Charm => self.charm = value,
            GreekKind::Speed => self.speed = value,
            GreekKind::Color => self.color = value,
            GreekKind::Volga => self.volga = value,
            GreekKind::Zomma => self.zomma = value,
            GreekKind::Pnl => self.pnl = Some(value),
        }
    }

    /// Every field multiplied by `weight` (a leg's signed quantity).
    pub fn scaled(&self, weight: f64) -> Self {
        Self {
            price: self.price * weight,
            delta: self.delta * weight,
            gamma: self.gamma * weight,
            theta: self.theta * weight,
            vega: self.vega * weight,
            rho: self.rho * weight,
            vanna: self.vanna * weight,
            charm: self.charm * weight,
            speed: self.speed * weight,
            color: self.color * weight,
            volga: self.volga * weight,
            zomma: self.zomma * weight,
            pnl: self.pnl.map(|p| p * weight),
        }
    }

    /// Sets `pnl = price - initial_cost` and returns self for method chaining.
    #[inline]
    pub fn with_pnl(mut self, initial_cost: f64) -> Self {
        self.pnl = Some(self.price - initial_cost);
        self
    }
}

impl AddAssign for GreeksResult {
    fn add_assign(&mut self, rhs: Self) {
        self.price += rhs.price;
        self.delta += rhs.delta;
        self.gamma += rhs.gamma;
        self.theta += rhs.theta;
        self.vega += rhs.vega;
        self.rho += rhs.rho;
        self.vanna += rhs.vanna;
        self.charm += rhs.charm;
        self.speed += rhs.speed;
        self.color += rhs.color;
        self.volga += rhs.volga;
        self.zomma += rhs.zomma;
        self.pnl = match (self.pnl, rhs.pnl) {
            (Some(a), Some(b)) => Some(a + b),
            (a, None) => a,
            (None, b) => b,
        };
    }
}

impl Add for GreeksResult {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl std::iter::Sum for GreeksResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}
