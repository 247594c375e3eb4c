//! Instrument error types.
//!
//! The leg composer itself never fails; these errors come from parsing names
//! supplied as text (configuration files, command-line flags).

use thiserror::Error;

/// Instrument-related parsing errors.
///
/// # Variants
/// - `UnknownOptionKind`: not `call`/`put`
/// - `UnknownStrategy`: no strategy selector has this name
/// - `UnknownGreek`: no result field has this name
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::UnknownStrategy { name: "condor".to_string() };
/// assert!(format!("{}", err).contains("condor"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstrumentError {
    /// Option kind is neither call nor put.
    #[error("Unknown option kind: '{name}'")]
    UnknownOptionKind {
        /// The text that failed to parse
        name: String,
    },

    /// Strategy name matches no selector.
    #[error("Unknown strategy: '{name}'")]
    UnknownStrategy {
        /// The text that failed to parse
        name: String,
    },

    /// Greek name matches no result field.
    #[error("Unknown greek: '{name}'")]
    UnknownGreek {
        /// The text that failed to parse
        name: String,
    },
}
