//! Error types for event parsing.

use thiserror::Error;

/// Error returned when an input line cannot be turned into a [`LogEvent`](super::LogEvent).
#[derive(Debug, Error)]
pub enum EventParseError {
    /// The line is not valid JSON.
    #[error("Invalid CLEF JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The line is valid JSON but not an object.
    #[error("CLEF event must be a JSON object")]
    NotAnObject,
}
