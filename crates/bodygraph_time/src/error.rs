//! Error types for calendar handling.

use thiserror::Error;

/// Errors from calendar validation or timestamp parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is out of range or not finite.
    #[error("invalid calendar field: {0}")]
    InvalidCalendar(&'static str),
    /// A timestamp string could not be parsed.
    #[error("cannot parse timestamp {input:?}: {reason}")]
    Parse { input: String, reason: &'static str },
}
