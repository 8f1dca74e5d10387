//! Error types for webhook delivery.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong before a response could be obtained.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS handshake failures and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from the given URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error that prevented a card from reaching the webhook at all.
///
/// This is the detail carried by
/// [`DeliveryOutcome::FailedException`](super::DeliveryOutcome::FailedException).
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The card could not be serialized to JSON.
    #[error("Failed to serialize card: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The HTTP request failed before a response was received.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl DispatchError {
    /// Returns the message followed by every underlying cause, joined by `": "`.
    ///
    /// Transport errors often keep the actual reason (connection refused, DNS
    /// or TLS failure) several sources deep.
    #[must_use]
    pub fn detail(&self) -> String {
        error_chain(self)
    }
}

/// Joins an error and its sources into one line.
///
/// A cause whose text the accumulated line already ends with is skipped, so
/// wrappers that embed their source in their own message are not repeated.
pub(crate) fn error_chain(error: &dyn std::error::Error) -> String {
    let mut detail = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let message = cause.to_string();
        if !message.is_empty() && !detail.ends_with(&message) {
            detail.push_str(": ");
            detail.push_str(&message);
        }
        source = cause.source();
    }

    detail
}
