//! Selection of a single output field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::instruments::InstrumentError;

/// One field of a [`GreeksResult`](super::GreeksResult).
///
/// # Examples
/// ```
/// use pricer_models::greeks::GreekKind;
///
/// let kind: GreekKind = "Vomma".parse().unwrap();
/// assert_eq!(kind, GreekKind::Volga);
/// assert_eq!(kind.to_string(), "volga");
/// assert_eq!(GreekKind::ALL.len(), 13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GreekKind {
    /// Theoretical value
    Price,
    /// ∂V/∂S
    Delta,
    /// ∂²V/∂S²
    Gamma,
    /// Time decay per calendar day
    Theta,
    /// Per one volatility point
    Vega,
    /// Per one rate point
    Rho,
    /// ∂²V/∂S∂σ
    Vanna,
    /// Delta decay
    Charm,
    /// ∂³V/∂S³
    Speed,
    /// Gamma decay
    Color,
    /// ∂²V/∂σ² (vomma)
    Volga,
    /// ∂³V/∂S²∂σ
    Zomma,
    /// Price minus initial cost
    Pnl,
}

impl GreekKind {
    /// Every field, in output order.
    pub const ALL: [GreekKind; 13] = [
        GreekKind::Price,
        GreekKind::Delta,
        GreekKind::Gamma,
        GreekKind::Theta,
        GreekKind::Vega,
        GreekKind::Rho,
        GreekKind::Vanna,
        GreekKind::Charm,
        GreekKind::Speed,
        GreekKind::Color,
        GreekKind::Volga,
        GreekKind::Zomma,
        GreekKind::Pnl,
    ];

    /// Lowercase field name.
    pub fn name(&self) -> &'static str {
        match self {
            GreekKind::Price => "price",
            GreekKind::Delta => "delta",
            GreekKind::Gamma => "gamma",
            GreekKind::Theta => "theta",
            GreekKind::Vega => "vega",
            GreekKind::Rho => "rho",
            GreekKind::Vanna => "vanna",
            GreekKind::Charm => "charm",
            GreekKind::Speed => "speed",
            GreekKind::Color => "color",
            GreekKind::Volga => "volga",
            GreekKind::Zomma => "zomma",
            GreekKind::Pnl => "pnl",
        }
    }
}

impl FromStr for GreekKind {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "vomma" => return Ok(GreekKind::Volga),
            "p&l" | "profit" => return Ok(GreekKind::Pnl),
            _ => {}
        }
        GreekKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| InstrumentError::UnknownGreek {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for GreekKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
