//! Option kind (call or put).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::InstrumentError;

/// Call or put.
///
/// For multi-leg strategies the caller's kind selector doubles as the
/// long/short direction of the whole structure, see [`OptionKind::direction`].
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionKind;
///
/// let kind: OptionKind = "Put".parse().unwrap();
/// assert_eq!(kind, OptionKind::Put);
/// assert_eq!(kind.intrinsic(90.0, 100.0), 10.0);
/// assert_eq!(kind.direction(), -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Call option: max(S - K, 0)
    #[default]
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionKind {
    /// Payoff at expiry.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    /// Base quantity multiplier when this kind selects a strategy direction:
    /// `+1` (long the structure) for call, `-1` (short) for put.
    #[inline]
    pub fn direction(&self) -> f64 {
        match self {
            OptionKind::Call => 1.0,
            OptionKind::Put => -1.0,
        }
    }

    /// Returns true for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }

    /// Lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }
}

impl FromStr for OptionKind {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" | "long" => Ok(OptionKind::Call),
            "put" | "p" | "short" => Ok(OptionKind::Put),
            _ => Err(InstrumentError::UnknownOptionKind {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_intrinsic() {
        assert_eq!(OptionKind::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionKind::Call.intrinsic(90.0, 100.0), 0.0);
        assert_eq!(OptionKind::Call.intrinsic(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_put_intrinsic() {
        assert_eq!(OptionKind::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionKind::Put.intrinsic(110.0, 100.0), 0.0);
    }

    #[test]
    fn test_direction() {
        assert_eq!(OptionKind::Call.direction(), 1.0);
        assert_eq!(OptionKind::Put.direction(), -1.0);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("LONG".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("short".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert!("straddle".parse::<OptionKind>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&OptionKind::Put).unwrap(), "\"put\"");
    }
}
