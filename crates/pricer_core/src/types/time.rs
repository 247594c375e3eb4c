//! Day bases and unit conversions used at the engine boundary.
//!
//! The engine works in year fractions and decimals. Collaborators show tenors
//! in days and rates/volatilities in percent; these helpers convert between the
//! two.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::time::{from_percent, to_percent, DayBasis};
//!
//! let t = DayBasis::Trading.from_days(21.0);
//! assert!((t - 21.0 / 252.0).abs() < 1e-15);
//!
//! assert!((to_percent(0.25) - 25.0).abs() < 1e-12);
//! assert!((from_percent(5.0) - 0.05).abs() < 1e-12);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParamError;

/// Trading days per year; volatility accrues on this basis.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Calendar days per year; discounting and dividends accrue on this basis.
pub const CALENDAR_DAYS_PER_YEAR: f64 = 365.0;

/// Day-count basis for converting between year fractions and day counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayBasis {
    /// 252 trading days per year.
    Trading,
    /// 365 calendar days per year.
    Calendar,
}

impl DayBasis {
    /// Days per year on this basis.
    #[inline]
    pub fn days_per_year(&self) -> f64 {
        match self {
            DayBasis::Trading => TRADING_DAYS_PER_YEAR,
            DayBasis::Calendar => CALENDAR_DAYS_PER_YEAR,
        }
    }

    /// Converts a year fraction to a day count.
    #[inline]
    pub fn to_days(&self, years: f64) -> f64 {
        years * self.days_per_year()
    }

    /// Converts a day count to a year fraction.
    #[inline]
    pub fn from_days(&self, days: f64) -> f64 {
        days / self.days_per_year()
    }

    /// Lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            DayBasis::Trading => "trading",
            DayBasis::Calendar => "calendar",
        }
    }
}

impl FromStr for DayBasis {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trading" | "252" => Ok(DayBasis::Trading),
            "calendar" | "365" => Ok(DayBasis::Calendar),
            _ => Err(ParamError::UnknownDayBasis(s.to_string())),
        }
    }
}

impl fmt::Display for DayBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Decimal to percent (0.2 → 20).
#[inline]
pub fn to_percent(value: f64) -> f64 {
    value * 100.0
}

/// Percent to decimal (20 → 0.2).
#[inline]
pub fn from_percent(value: f64) -> f64 {
    value / 100.0
}
