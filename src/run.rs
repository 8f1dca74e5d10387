//! Application execution logic.
//!
//! This module contains the async loop that reads CLEF events from stdin
//! and hands each one to the connector.

use std::fmt;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tokio_stream::wrappers::LinesStream;
use tokio_stream::{Stream, StreamExt};

use seq_teams::config::ValidatedConfig;
use seq_teams::connector::Connector;
use seq_teams::event::parse_clef;
use seq_teams::sink::{Sink, TracingSink};
use seq_teams::webhook::{DeliveryOutcome, HttpClient, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Reading the event stream failed.
    #[error("Failed to read events from stdin: {0}")]
    Input(#[source] std::io::Error),
}

/// Counters for one run, logged on exit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Events handed to the connector.
    pub events: u64,
    /// Events whose card was accepted by the webhook.
    pub delivered: u64,
    /// Events whose delivery failed.
    pub failed: u64,
    /// Input lines that could not be parsed.
    pub skipped: u64,
}

impl RunSummary {
    fn record(&mut self, outcome: &DeliveryOutcome) {
        self.events += 1;
        if outcome.is_delivered() {
            self.delivered += 1;
        } else {
            self.failed += 1;
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} event(s): {} delivered, {} failed, {} line(s) skipped",
            self.events, self.delivered, self.failed, self.skipped
        )
    }
}

/// Executes the main application loop.
///
/// Reads events from stdin until end of input or a shutdown signal.
///
/// # Errors
///
/// Returns an error if stdin cannot be read. Delivery failures are never
/// errors; they are logged and counted.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it requires
/// real stdin and signal handling.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<RunSummary, RunError> {
    let connector = Connector::from_config(&config, ReqwestClient::new(), TracingSink);

    if config.trace_message {
        tracing::info!("Trace mode enabled - successful deliveries will be logged");
    }
    tracing::info!("Waiting for events on stdin");

    let lines = LinesStream::new(BufReader::new(tokio::io::stdin()).lines());
    process_events(lines, &connector, shutdown_signal()).await
}

/// Feeds every line of `lines` to the connector, one event at a time.
///
/// Each delivery completes before the next line is read. Stops cleanly at
/// end of input or when `shutdown` resolves.
///
/// # Errors
///
/// Returns [`RunError::Input`] if the stream yields an I/O error.
pub async fn process_events<S, H, K, F>(
    mut lines: S,
    connector: &Connector<H, K>,
    shutdown: F,
) -> Result<RunSummary, RunError>
where
    S: Stream<Item = std::io::Result<String>> + Unpin,
    H: HttpClient,
    K: Sink,
    F: Future<Output = ()>,
{
    let mut summary = RunSummary::default();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            () = &mut shutdown => {
                tracing::info!("Shutdown signal received, stopping...");
                return Ok(summary);
            }

            line = lines.next() => {
                match line {
                    Some(Ok(line)) => handle_line(&line, connector, &mut summary).await,
                    Some(Err(e)) => return Err(RunError::Input(e)),
                    None => {
                        tracing::debug!("End of input");
                        return Ok(summary);
                    }
                }
            }
        }
    }
}

/// Parses and dispatches a single input line.
async fn handle_line<H: HttpClient, K: Sink>(
    line: &str,
    connector: &Connector<H, K>,
    summary: &mut RunSummary,
) {
    let line = line.trim();
    if line.is_empty() {
        return;
    }

    match parse_clef(line) {
        Ok(event) => {
            let outcome = connector.on_event(&event).await;
            summary.record(&outcome);
        }
        Err(e) => {
            tracing::warn!("Skipping malformed event: {e}");
            summary.skipped += 1;
        }
    }
}

/// Returns a future that completes when a shutdown signal is received.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
