//! Scalar-or-vector parameter values.
//!
//! Every numeric field of the caller-facing parameter set may carry either a
//! single number or a short ordered list of numbers. A list with more than one
//! entry is a *comparison dimension*: the scenario generator emits one series
//! per entry. Everywhere else only the first entry is used.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParamError;

/// A parameter that is either a single value or an ordered list of values.
///
/// Deserialises untagged, so both `100.0` and `[90.0, 100.0]` are accepted.
///
/// # Examples
/// ```
/// use pricer_core::types::ParamValue;
///
/// let spot: ParamValue = "90, 100, 110".parse().unwrap();
/// assert_eq!(spot.as_scalar(), 90.0);
/// assert_eq!(spot.len(), 3);
///
/// let strike = ParamValue::from(100.0);
/// assert!(strike.comparison_values().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A single value.
    Scalar(f64),
    /// An ordered list of values.
    Vector(Vec<f64>),
}

impl ParamValue {
    /// The value used when the field is not being compared: the scalar itself,
    /// or the first list entry. An empty list yields NaN.
    #[inline]
    pub fn as_scalar(&self) -> f64 {
        match self {
            ParamValue::Scalar(v) => *v,
            ParamValue::Vector(values) => values.first().copied().unwrap_or(f64::NAN),
        }
    }

    /// The comparison values when this field is a list of more than one entry.
    #[inline]
    pub fn comparison_values(&self) -> Option<&[f64]> {
        match self {
            ParamValue::Vector(values) if values.len() > 1 => Some(values),
            _ => None,
        }
    }

    /// The list entry at `index`, if this field is a list long enough to have one.
    #[inline]
    pub fn list_entry(&self, index: usize) -> Option<f64> {
        match self {
            ParamValue::Scalar(_) => None,
            ParamValue::Vector(values) => values.get(index).copied(),
        }
    }

    /// Number of values carried (1 for a scalar).
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            ParamValue::Scalar(_) => 1,
            ParamValue::Vector(values) => values.len(),
        }
    }

    /// True for an empty list.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every carried value.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        let slice: &[f64] = match self {
            ParamValue::Scalar(v) => std::slice::from_ref(v),
            ParamValue::Vector(values) => values,
        };
        slice.iter().copied()
    }

    /// Applies `f` to every carried value, keeping the scalar/list shape.
    ///
    /// Used at the unit boundary, e.g. converting percent to decimals.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> ParamValue {
        match self {
            ParamValue::Scalar(v) => ParamValue::Scalar(f(*v)),
            ParamValue::Vector(values) => ParamValue::Vector(values.iter().map(|&v| f(v)).collect()),
        }
    }
}

impl Default for ParamValue {
    fn default() -> Self {
        ParamValue::Scalar(0.0)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<Vec<f64>> for ParamValue {
    fn from(values: Vec<f64>) -> Self {
        ParamValue::Vector(values)
    }
}

impl FromStr for ParamValue {
    type Err = ParamError;

    /// Parses `"100"` into a scalar and `"90,100,110"` into a list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('[').trim_end_matches(']');
        if trimmed.trim().is_empty() {
            return Err(ParamError::Empty);
        }

        let values = trimmed
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>()
                    .map_err(|_| ParamError::InvalidNumber(part.to_string()))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        if values.len() == 1 && !s.contains('[') && !s.contains(',') {
            Ok(ParamValue::Scalar(values[0]))
        } else {
            Ok(ParamValue::Vector(values))
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Scalar(v) => write!(f, "{}", v),
            ParamValue::Vector(values) => {
                let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}
