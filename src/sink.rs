//! Observability sink for delivery diagnostics.
//!
//! The dispatcher never returns errors to its caller. Everything it has to
//! say about a delivery is written as a [`SinkRecord`] to a [`Sink`].

use std::sync::{Arc, Mutex, PoisonError};

/// Severity of a sink record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordLevel {
    /// Diagnostic detail, only produced in trace mode.
    Trace,
    /// Informational record.
    Information,
    /// Delivery failure.
    Error,
}

/// A leveled, structured log record with named context fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkRecord {
    /// Record severity.
    pub level: RecordLevel,
    /// Human-readable message with the context values already rendered.
    pub message: String,
    /// Webhook URI the record refers to.
    pub uri: String,
    /// Numeric HTTP status code, when a response was received.
    pub status_code: Option<u16>,
    /// HTTP status phrase, when a response was received.
    pub status: Option<String>,
    /// Response body text, when a response was received.
    pub body: Option<String>,
    /// Error detail, for transport failures.
    pub error: Option<String>,
}

impl SinkRecord {
    /// Creates a record carrying only a URI and a message.
    #[must_use]
    pub fn new(level: RecordLevel, uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            uri: uri.into(),
            status_code: None,
            status: None,
            body: None,
            error: None,
        }
    }

    /// Attaches HTTP response details.
    #[must_use]
    pub fn with_response(
        mut self,
        status_code: u16,
        status: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        self.status_code = Some(status_code);
        self.status = Some(status.into());
        self.body = Some(body.into());
        self
    }

    /// Attaches an error detail.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

/// Destination for [`SinkRecord`]s.
pub trait Sink: Send + Sync {
    /// Writes one record.
    fn emit(&self, record: SinkRecord);
}

impl<T: Sink + ?Sized> Sink for Arc<T> {
    fn emit(&self, record: SinkRecord) {
        (**self).emit(record);
    }
}

impl<T: Sink + ?Sized> Sink for &T {
    fn emit(&self, record: SinkRecord) {
        (**self).emit(record);
    }
}

/// Production sink that forwards records to `tracing`.
///
/// Trace records are written at `DEBUG`, information records at `INFO` and
/// error records at `ERROR`. The default filter is `info`, so with trace mode
/// on the "Start Processing" record only shows up when `--verbose` is passed
/// or `RUST_LOG=debug` is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn emit(&self, record: SinkRecord) {
        let SinkRecord {
            level,
            message,
            uri,
            status_code,
            status,
            body,
            error,
        } = record;
        let (status, body, error) = (status.as_deref(), body.as_deref(), error.as_deref());

        match level {
            RecordLevel::Trace => {
                tracing::debug!(uri = %uri, status_code, status, body, error, "{message}");
            }
            RecordLevel::Information => {
                tracing::info!(uri = %uri, status_code, status, body, error, "{message}");
            }
            RecordLevel::Error => {
                tracing::error!(uri = %uri, status_code, status, body, error, "{message}");
            }
        }
    }
}

/// Sink that keeps every record in memory.
///
/// Useful for embedding the connector where records are inspected
/// programmatically, and in tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<SinkRecord>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all records emitted so far.
    #[must_use]
    pub fn records(&self) -> Vec<SinkRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the records emitted at `level`.
    #[must_use]
    pub fn records_at(&self, level: RecordLevel) -> Vec<SinkRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .collect()
    }
}

impl Sink for MemorySink {
    fn emit(&self, record: SinkRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}
