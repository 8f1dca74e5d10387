//! Host-facing entry point.
//!
//! The [`Connector`] is what the host calls once per event. It builds the
//! card and hands it to the dispatcher; nothing it does can fail from the
//! caller's point of view.

use crate::card::CardBuilder;
use crate::config::ValidatedConfig;
use crate::event::LogEvent;
use crate::sink::Sink;
use crate::webhook::{DeliveryOutcome, Dispatcher, HttpClient};

/// Connects the card builder and the dispatcher.
///
/// Holds only immutable configuration, so a shared reference can serve
/// concurrent events without locking.
#[derive(Debug)]
pub struct Connector<H, K> {
    builder: CardBuilder,
    dispatcher: Dispatcher<H, K>,
}

impl<H, K> Connector<H, K> {
    /// Creates a connector from its two halves.
    #[must_use]
    pub const fn new(builder: CardBuilder, dispatcher: Dispatcher<H, K>) -> Self {
        Self {
            builder,
            dispatcher,
        }
    }

    /// Creates a connector from validated configuration.
    #[must_use]
    pub fn from_config(config: &ValidatedConfig, client: H, sink: K) -> Self {
        let mut builder = CardBuilder::new(config.base_url.clone());
        if let Some(color) = &config.color {
            builder = builder.with_color(color.clone());
        }

        let dispatcher = Dispatcher::new(client, sink, config.webhook_url.clone())
            .with_trace(config.trace_message);

        Self::new(builder, dispatcher)
    }

    /// Returns the card builder.
    #[must_use]
    pub const fn builder(&self) -> &CardBuilder {
        &self.builder
    }

    /// Returns the dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &Dispatcher<H, K> {
        &self.dispatcher
    }
}

impl<H: HttpClient, K: Sink> Connector<H, K> {
    /// Handles one event: builds its card and delivers it.
    pub async fn on_event(&self, event: &LogEvent) -> DeliveryOutcome {
        let card = self.builder.build(event);
        tracing::debug!(
            id = %event.id,
            level = %event.level,
            timestamp = event.timestamp.as_deref(),
            "Dispatching card"
        );

        self.dispatcher
            .dispatch(&card, &event.rendered_message)
            .await
    }
}
