//! Second- and third-order Greeks.
//!
//! Built on the [`Intermediates`] of the core pricer and the unscaled gamma
//! and vega. Charm and color mix the two time bases: the drift numerator
//! `2(r - q)·τ - d₂·σ√t` uses the discount time while every denominator uses
//! the volatility time. This is a hybrid, not a re-derivation of the partials
//! under two independent clocks.
//!
//! With `τ = t` and `q = 0`: vanna, speed, volga and zomma are the usual
//! partials, call charm is `-∂Δ/∂T`, color is `∂Γ/∂T`, and put charm is the
//! negated call charm.

use super::black_scholes::{Intermediates, PricingInput};
use super::distributions::norm_cdf;
use crate::instruments::OptionKind;

/// Vanna, charm, speed, color, volga and zomma of one option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HigherOrderGreeks {
    /// ∂Δ/∂σ
    pub vanna: f64,
    /// Delta decay
    pub charm: f64,
    /// ∂Γ/∂S
    pub speed: f64,
    /// Gamma decay
    pub color: f64,
    /// ∂vega/∂σ
    pub volga: f64,
    /// ∂Γ/∂σ
    pub zomma: f64,
}

impl HigherOrderGreeks {
    /// Computes the higher-order block from the shared intermediates.
    ///
    /// `gamma` and `vega` must be unscaled (vega per unit volatility).
    pub fn compute(
        input: &PricingInput,
        m: &Intermediates,
        kind: OptionKind,
        gamma: f64,
        vega: f64,
    ) -> Self {
        let s = input.spot;
        let q = input.dividend;
        let vol_sqrt_t = m.vol_sqrt_t();
        let drift = 2.0 * (input.rate - q) * m.tau - m.d2 * vol_sqrt_t;

        let vanna = -m.dividend_factor * m.pdf_d1 * (m.d2 / m.sigma);

        let charm_term = drift / (2.0 * m.t * vol_sqrt_t);
        let charm = match kind {
            OptionKind::Call => {
                -m.dividend_factor * (m.pdf_d1 * charm_term - q * norm_cdf(m.d1))
            }
            OptionKind::Put => m.dividend_factor * (m.pdf_d1 * charm_term + q * norm_cdf(-m.d1)),
        };

        let speed = -(gamma / s) * ((m.d1 / vol_sqrt_t) + 1.0);
        let color = -(gamma / (2.0 * m.t)) * (1.0 + (drift / vol_sqrt_t) * m.d1) + q * gamma;
        let volga = vega * m.d1 * m.d2 / m.sigma;
        let zomma = gamma * ((m.d1 * m.d2 - 1.0) / m.sigma);

        Self {
            vanna,
            charm,
            speed,
            color,
            volga,
            zomma,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::BlackScholes;
    use approx::assert_relative_eq;

    fn input() -> PricingInput {
        PricingInput::new(105.0, 100.0, 0.75, 0.25, 0.04).with_textbook_mode(true)
    }

    fn greeks_at(kind: OptionKind, f: impl Fn(&mut PricingInput)) -> crate::greeks::GreeksResult {
        let mut p = input();
        f(&mut p);
        BlackScholes::greeks(&p, kind)
    }

    #[test]
    fn test_vanna_volga_vs_finite_diff() {
        let g = greeks_at(OptionKind::Call, |_| {});
        let h = 1e-4;
        let up = greeks_at(OptionKind::Call, |p| p.volatility += h);
        let down = greeks_at(OptionKind::Call, |p| p.volatility -= h);

        assert_relative_eq!((up.delta - down.delta) / (2.0 * h), g.vanna, epsilon = 1e-4);
        // vega is reported per point, volga per unit volatility
        assert_relative_eq!((up.vega - down.vega) * 100.0 / (2.0 * h), g.volga, epsilon = 1e-3);
    }

    #[test]
    fn test_speed_zomma_vs_finite_diff() {
        let g = greeks_at(OptionKind::Call, |_| {});

        let h = 1e-2;
        let up = greeks_at(OptionKind::Call, |p| p.spot += h);
        let down = greeks_at(OptionKind::Call, |p| p.spot -= h);
        assert_relative_eq!((up.gamma - down.gamma) / (2.0 * h), g.speed, epsilon = 1e-6);

        let h = 1e-4;
        let up = greeks_at(OptionKind::Call, |p| p.volatility += h);
        let down = greeks_at(OptionKind::Call, |p| p.volatility -= h);
        assert_relative_eq!((up.gamma - down.gamma) / (2.0 * h), g.zomma, epsilon = 1e-5);
    }

    #[test]
    fn test_charm_color_vs_finite_diff() {
        // Single time basis, no dividend: call charm = -∂Δ/∂T, color = ∂Γ/∂T
        let g = greeks_at(OptionKind::Call, |_| {});
        let h = 1e-4;
        let up = greeks_at(OptionKind::Call, |p| p.vol_time += h);
        let down = greeks_at(OptionKind::Call, |p| p.vol_time -= h);
        assert_relative_eq!(-(up.delta - down.delta) / (2.0 * h), g.charm, epsilon = 1e-6);
        assert_relative_eq!((up.gamma - down.gamma) / (2.0 * h), g.color, epsilon = 1e-6);
    }

    #[test]
    fn test_put_charm_mirrors_call_without_dividend() {
        let call = greeks_at(OptionKind::Call, |_| {});
        let put = greeks_at(OptionKind::Put, |_| {});
        assert_eq!(put.charm, -call.charm);
    }

    #[test]
    fn test_call_put_share_symmetric_terms() {
        let call = greeks_at(OptionKind::Call, |p| p.dividend = 0.02);
        let put = greeks_at(OptionKind::Put, |p| p.dividend = 0.02);
        assert_eq!(call.vanna, put.vanna);
        assert_eq!(call.speed, put.speed);
        assert_eq!(call.color, put.color);
        assert_eq!(call.volga, put.volga);
        assert_eq!(call.zomma, put.zomma);
    }

    #[test]
    fn test_hybrid_drift_uses_discount_time() {
        let m1 = Intermediates::new(&input().with_discount_time(0.75));
        let m2 = Intermediates::new(&input().with_discount_time(1.0));
        let g1 = BlackScholes::greeks(&input().with_discount_time(0.75), OptionKind::Call);
        let g2 = BlackScholes::greeks(&input().with_discount_time(1.0), OptionKind::Call);
        assert_eq!(m1.t, m2.t);
        assert!(g1.charm != g2.charm);
        assert!(g1.color != g2.color);
    }
}
