//! Strategy selection and modifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::InstrumentError;
use super::leg::LegDefinition;

/// Default primary spread width.
pub const DEFAULT_WIDTH: f64 = 10.0;

/// Default inter-expiry offset in calendar days.
pub const DEFAULT_DAY_OFFSET: f64 = 30.0;

/// Closed set of leg-generation rules.
///
/// Names that match no rule become [`StrategySelector::Unrecognised`], which
/// composes to no legs at all.
///
/// For every rule except `Single` the caller's option kind is a direction:
/// call means long the structure and put means short it. Ratio, calendar and
/// diagonal spreads also take their leg kind from the same choice, so a put
/// calendar is a short put calendar. This may read inverted against desk
/// convention and is kept as is.
///
/// # Examples
/// ```
/// use pricer_models::instruments::StrategySelector;
///
/// assert_eq!(StrategySelector::from_name("iron_condor"), StrategySelector::IronCondor);
/// assert_eq!(
///     StrategySelector::from_name("condor"),
///     StrategySelector::Unrecognised("condor".to_string())
/// );
/// assert!("condor".parse::<StrategySelector>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StrategySelector {
    /// One option of the selected kind
    #[default]
    Single,
    /// Call and put at the strike
    Straddle,
    /// Put below and call above the strike
    Strangle,
    /// Three-strike call butterfly
    Butterfly,
    /// Four-strike put/call condor
    IronCondor,
    /// One at the strike against two further out
    RatioSpread,
    /// Same strike, near and far expiry
    CalendarSpread,
    /// Out-of-the-money near expiry against at-the-money far expiry
    DiagonalSpread,
    /// Two calendar spreads either side of the strike
    TimeButterfly,
    /// Call at the strike against a call one width above
    VerticalCallSpread,
    /// Put at the strike against a put one width below
    VerticalPutSpread,
    /// Caller-supplied legs, used verbatim
    Custom(Vec<LegDefinition>),
    /// A name that matches no rule
    Unrecognised(String),
}

impl StrategySelector {
    /// Every generated (non-custom) selector.
    pub const GENERATED: [StrategySelector; 11] = [
        StrategySelector::Single,
        StrategySelector::Straddle,
        StrategySelector::Strangle,
        StrategySelector::Butterfly,
        StrategySelector::IronCondor,
        StrategySelector::RatioSpread,
        StrategySelector::CalendarSpread,
        StrategySelector::DiagonalSpread,
        StrategySelector::TimeButterfly,
        StrategySelector::VerticalCallSpread,
        StrategySelector::VerticalPutSpread,
    ];

    /// Maps a name to a selector. Never fails: unknown names are kept as
    /// [`StrategySelector::Unrecognised`]. `custom` maps to an empty custom leg list.
    pub fn from_name(name: &str) -> Self {
        let key = name.trim().to_lowercase().replace(['-', ' '], "_");
        match key.as_str() {
            "single" => StrategySelector::Single,
            "straddle" => StrategySelector::Straddle,
            "strangle" => StrategySelector::Strangle,
            "butterfly" => StrategySelector::Butterfly,
            "iron_condor" => StrategySelector::IronCondor,
            "ratio_spread" => StrategySelector::RatioSpread,
            "calendar_spread" | "calendar" => StrategySelector::CalendarSpread,
            "diagonal_spread" | "diagonal" => StrategySelector::DiagonalSpread,
            "time_butterfly" => StrategySelector::TimeButterfly,
            "vertical_call_spread" | "bull_call_spread" => StrategySelector::VerticalCallSpread,
            "vertical_put_spread" | "bear_put_spread" => StrategySelector::VerticalPutSpread,
            "custom" => StrategySelector::Custom(Vec::new()),
            _ => StrategySelector::Unrecognised(name.to_string()),
        }
    }

    /// Canonical name.
    pub fn name(&self) -> &str {
        match self {
            StrategySelector::Single => "single",
            StrategySelector::Straddle => "straddle",
            StrategySelector::Strangle => "strangle",
            StrategySelector::Butterfly => "butterfly",
            StrategySelector::IronCondor => "iron_condor",
            StrategySelector::RatioSpread => "ratio_spread",
            StrategySelector::CalendarSpread => "calendar_spread",
            StrategySelector::DiagonalSpread => "diagonal_spread",
            StrategySelector::TimeButterfly => "time_butterfly",
            StrategySelector::VerticalCallSpread => "vertical_call_spread",
            StrategySelector::VerticalPutSpread => "vertical_put_spread",
            StrategySelector::Custom(_) => "custom",
            StrategySelector::Unrecognised(name) => name,
        }
    }
}

impl FromStr for StrategySelector {
    type Err = InstrumentError;

    /// Strict parse: unknown names are an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match StrategySelector::from_name(s) {
            StrategySelector::Unrecognised(name) => Err(InstrumentError::UnknownStrategy { name }),
            selector => Ok(selector),
        }
    }
}

impl fmt::Display for StrategySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A strategy selector with its scalar modifiers.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{Strategy, StrategySelector};
///
/// let s = Strategy::new(StrategySelector::Butterfly).with_width(5.0);
/// assert_eq!(s.width, 5.0);
/// assert_eq!(s.secondary_width(), 5.0);
/// assert_eq!(s.day_offset, 30.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Strategy {
    /// Leg-generation rule
    pub selector: StrategySelector,
    /// Primary spread width (strike units)
    pub width: f64,
    /// Secondary width; defaults to `width`
    pub width2: Option<f64>,
    /// Inter-expiry offset in calendar days
    pub day_offset: f64,
}

impl Strategy {
    /// Strategy with default width (10) and day offset (30).
    pub fn new(selector: StrategySelector) -> Self {
        Self {
            selector,
            width: DEFAULT_WIDTH,
            width2: None,
            day_offset: DEFAULT_DAY_OFFSET,
        }
    }

    /// Sets the primary width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the secondary width.
    pub fn with_width2(mut self, width2: f64) -> Self {
        self.width2 = Some(width2);
        self
    }

    /// Sets the inter-expiry offset in calendar days.
    pub fn with_day_offset(mut self, day_offset: f64) -> Self {
        self.day_offset = day_offset;
        self
    }

    /// Secondary width, falling back to the primary width.
    #[inline]
    pub fn secondary_width(&self) -> f64 {
        self.width2.unwrap_or(self.width)
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::new(StrategySelector::Single)
    }
}
