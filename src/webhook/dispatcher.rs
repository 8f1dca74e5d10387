//! Single-attempt card delivery with outcome reporting.

use http::HeaderValue;
use http::header::{ACCEPT, CONTENT_TYPE};

use crate::card::MessageCard;
use crate::sink::{RecordLevel, Sink, SinkRecord};

use super::{DispatchError, HttpClient, HttpRequest, HttpResponse};

fn application_json() -> HeaderValue {
    HeaderValue::from_static("application/json")
}

/// Result of one delivery attempt.
///
/// Every failure mode is folded into a variant; delivery never returns an
/// error to its caller.
#[derive(Debug)]
pub enum DeliveryOutcome {
    /// The webhook answered with a 2xx status.
    Delivered(HttpResponse),
    /// The webhook answered with a non-success status.
    FailedResponse(HttpResponse),
    /// No response was obtained.
    FailedException(DispatchError),
}

impl DeliveryOutcome {
    /// Returns true if the card was accepted by the webhook.
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered(_))
    }

    /// Returns the response, if one was received.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        match self {
            Self::Delivered(response) | Self::FailedResponse(response) => Some(response),
            Self::FailedException(_) => None,
        }
    }

    /// Converts the outcome into the record to report, if any.
    ///
    /// Successful deliveries are only reported when `trace` is set.
    #[must_use]
    pub fn to_record(&self, destination: &url::Url, trace: bool) -> Option<SinkRecord> {
        match self {
            Self::Delivered(response) if trace => Some(response_record(
                RecordLevel::Information,
                "Server replied",
                response,
            )),
            Self::Delivered(_) => None,
            Self::FailedResponse(response) => Some(response_record(
                RecordLevel::Error,
                "Could not send Teams message, server replied",
                response,
            )),
            Self::FailedException(error) => {
                let detail = error.detail();
                Some(
                    SinkRecord::new(
                        RecordLevel::Error,
                        destination.as_str(),
                        format!("An error occurred while constructing request: {detail}"),
                    )
                    .with_error(detail),
                )
            }
        }
    }
}

fn response_record(level: RecordLevel, prefix: &str, response: &HttpResponse) -> SinkRecord {
    let code = response.status.as_u16();
    let phrase = response.status_phrase();
    let body = response.body_text();

    SinkRecord::new(
        level,
        response.url.as_str(),
        format!("{prefix} {code} {phrase}: {body}"),
    )
    .with_response(code, phrase, body)
}

/// Posts cards to a webhook and reports the outcome to a [`Sink`].
///
/// Each call to [`dispatch`](Self::dispatch) performs exactly one POST with
/// no retry, then writes:
/// - one error record on any failure
/// - one information record on success, only in trace mode
/// - nothing on success otherwise
///
/// In trace mode a trace record is additionally written before sending.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
/// - `K`: The sink receiving delivery records
///
/// # Example
///
/// ```
/// use seq_teams::sink::TracingSink;
/// use seq_teams::webhook::{Dispatcher, ReqwestClient};
/// use url::Url;
///
/// let dispatcher = Dispatcher::new(
///     ReqwestClient::new(),
///     TracingSink,
///     Url::parse("https://example.webhook.office.com/webhookb2/abc").unwrap(),
/// )
/// .with_trace(true);
/// assert!(dispatcher.is_trace());
/// ```
#[derive(Debug)]
pub struct Dispatcher<H, K> {
    client: H,
    sink: K,
    url: url::Url,
    trace: bool,
}

impl<H, K> Dispatcher<H, K> {
    /// Creates a dispatcher with trace mode disabled.
    #[must_use]
    pub const fn new(client: H, sink: K, url: url::Url) -> Self {
        Self {
            client,
            sink,
            url,
            trace: false,
        }
    }

    /// Enables or disables trace mode.
    #[must_use]
    pub const fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Returns the webhook URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }

    /// Returns true if trace mode is enabled.
    #[must_use]
    pub const fn is_trace(&self) -> bool {
        self.trace
    }

    /// Returns the sink records are written to.
    #[must_use]
    pub const fn sink(&self) -> &K {
        &self.sink
    }
}

impl<H: HttpClient, K: Sink> Dispatcher<H, K> {
    /// Delivers `card` and reports the outcome.
    ///
    /// `rendered_message` is the original event text, only used for the
    /// trace-mode start record.
    pub async fn dispatch(&self, card: &MessageCard, rendered_message: &str) -> DeliveryOutcome {
        if self.trace {
            self.sink.emit(SinkRecord::new(
                RecordLevel::Trace,
                self.url.as_str(),
                format!("Start Processing {rendered_message}"),
            ));
        }

        let outcome = match self.send(card).await {
            Ok(response) if response.is_success() => DeliveryOutcome::Delivered(response),
            Ok(response) => DeliveryOutcome::FailedResponse(response),
            Err(error) => DeliveryOutcome::FailedException(error),
        };

        if let Some(record) = outcome.to_record(&self.url, self.trace) {
            self.sink.emit(record);
        }

        outcome
    }

    async fn send(&self, card: &MessageCard) -> Result<HttpResponse, DispatchError> {
        let body = serde_json::to_vec(card)?;
        let request = HttpRequest::post(self.url.clone())
            .with_header(ACCEPT, application_json())
            .with_header(CONTENT_TYPE, application_json())
            .with_body(body);

        Ok(self.client.request(request).await?)
    }
}
