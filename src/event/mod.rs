//! Incoming log events delivered by the Seq host.
//!
//! This module provides:
//! - The event value type handed to the connector ([`LogEvent`])
//! - The severity level enumeration ([`Level`])
//! - A parser for newline-delimited CLEF input ([`parse_clef`])

mod clef;
mod error;
mod level;

#[cfg(test)]
mod clef_tests;

pub use clef::{parse_clef, render_template};
pub use error::EventParseError;
pub use level::Level;

/// A single log event as delivered by the host.
///
/// Events are transient: one is created per notification and dropped
/// once the card has been dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    /// Host-assigned event identifier, used to build the permalink.
    pub id: String,
    /// Severity level.
    pub level: Level,
    /// Fully rendered message text.
    pub rendered_message: String,
    /// Raw timestamp as supplied by the host, if any.
    pub timestamp: Option<String>,
}

impl LogEvent {
    /// Creates an event without a timestamp.
    #[must_use]
    pub fn new(id: impl Into<String>, level: Level, rendered_message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            level,
            rendered_message: rendered_message.into(),
            timestamp: None,
        }
    }
}
