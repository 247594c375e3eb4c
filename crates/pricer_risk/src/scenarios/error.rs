//! Scenario error types.

use thiserror::Error;

/// Errors from parsing scenario requests supplied as text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// Axis name matches no sweep axis.
    #[error("Unknown sweep axis: '{name}' (expected spot, time, vol or rate)")]
    UnknownAxis {
        /// The text that failed to parse
        name: String,
    },
}
