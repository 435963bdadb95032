//! Error types for roster configuration and battle resolution.
//!
//! Every failure in this crate is a configuration problem: the model is
//! pure computation, so there is nothing transient to retry.

use thiserror::Error;

/// Errors raised while building knights or running a schedule.
///
/// # Examples
///
/// ```rust
/// use joust::JoustError;
///
/// let err = JoustError::UnknownKnight("gawain".to_string());
/// assert_eq!(err.to_string(), "Unknown knight in exchange: gawain");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoustError {
    /// A knight record could not be read.
    ///
    /// Covers missing required fields (`name`, `weapon`, ...), values of
    /// the wrong type and unknown stat names inside a potion effect.
    #[error("Invalid configuration for knight {key}: {reason}")]
    InvalidConfig { key: String, reason: String },

    /// The roster value was not a JSON object keyed by knight.
    #[error("Roster must be an object mapping keys to knight records")]
    NotAnObject,

    /// A stat name other than `hp`, `power` or `protection`.
    #[error("Unknown stat: {0}")]
    UnknownStat(String),

    /// An exchange referenced a roster key that does not exist.
    #[error("Unknown knight in exchange: {0}")]
    UnknownKnight(String),
}

impl JoustError {
    pub(crate) fn invalid_config(key: &str, source: serde_json::Error) -> Self {
        Self::InvalidConfig {
            key: key.to_string(),
            reason: source.to_string(),
        }
    }
}
