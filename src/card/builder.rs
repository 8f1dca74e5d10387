//! Maps log events onto message cards.

use crate::event::LogEvent;

use super::message::{CARD_CONTEXT, CARD_TYPE};
use super::{MessageCard, PotentialAction};

/// Maximum length of the card body, in characters.
pub const MAX_TEXT_CHARS: usize = 1000;

/// Label of the button linking back to Seq.
const OPEN_IN_SEQ: &str = "Click here to open in Seq";

/// Builds the Seq permalink for an event.
///
/// The base URL is used verbatim. An empty base URL yields a relative
/// (and therefore broken) link rather than an error.
#[must_use]
pub fn permalink(base_url: &str, event_id: &str) -> String {
    format!("{base_url}/#/events?filter=@Id%20%3D%3D%20%22{event_id}%22&show=expanded")
}

/// Converts [`LogEvent`]s into [`MessageCard`]s.
///
/// Building is pure and infallible; the builder holds only the static
/// settings and can be shared freely across threads.
///
/// # Example
///
/// ```
/// use seq_teams::card::CardBuilder;
/// use seq_teams::event::{Level, LogEvent};
///
/// let builder = CardBuilder::new("https://seq.example.com");
/// let card = builder.build(&LogEvent::new("abc-123", Level::Error, "disk full"));
///
/// assert_eq!(card.theme_color, "red");
/// assert!(card.text.starts_with("** Error :**"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardBuilder {
    base_url: String,
    color: Option<String>,
}

impl CardBuilder {
    /// Creates a builder that links events under `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            color: None,
        }
    }

    /// Sets an override color applied to every card.
    ///
    /// A blank value is treated as no override.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the override color, if one is set and non-blank.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Builds the card for one event.
    #[must_use]
    pub fn build(&self, event: &LogEvent) -> MessageCard {
        let link = permalink(&self.base_url, &event.id);
        let level = event.level.as_str();

        let text = truncate_chars(
            format!(
                "** {level} :** <a href={link}> link </a> {} ",
                event.rendered_message
            ),
            MAX_TEXT_CHARS,
        );

        let color = self
            .color()
            .unwrap_or(event.level.default_color())
            .to_string();

        MessageCard {
            card_type: CARD_TYPE,
            context: CARD_CONTEXT,
            title: format!("<span style='color:{color}'>{level}</span>"),
            theme_color: color,
            text,
            potential_action: vec![PotentialAction::view(OPEN_IN_SEQ, link)],
        }
    }
}

/// Cuts `text` to at most `max` characters, never splitting a code point.
fn truncate_chars(mut text: String, max: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max) {
        text.truncate(idx);
    }
    text
}
