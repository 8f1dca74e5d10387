//! Card payload types, serialized in the Office 365 connector card schema.

use serde::Serialize;

/// Card type tag understood by Teams incoming webhooks.
pub const CARD_TYPE: &str = "MessageCard";

/// Schema context for connector cards.
pub const CARD_CONTEXT: &str = "http://schema.org/extensions";

/// Action type that opens a URL.
pub const VIEW_ACTION: &str = "ViewAction";

/// A message card posted to a Teams webhook.
///
/// Serializes as:
///
/// ```json
/// {
///   "@type": "MessageCard",
///   "@context": "http://schema.org/extensions",
///   "title": "...",
///   "themeColor": "...",
///   "text": "...",
///   "potentialAction": [{ "type": "ViewAction", "name": "...", "target": ["..."] }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCard {
    /// Card type tag.
    #[serde(rename = "@type")]
    pub card_type: &'static str,
    /// Schema context.
    #[serde(rename = "@context")]
    pub context: &'static str,
    /// Title, may contain simple HTML markup.
    pub title: String,
    /// Accent color.
    pub theme_color: String,
    /// Body text.
    pub text: String,
    /// Actions rendered as buttons below the card.
    pub potential_action: Vec<PotentialAction>,
}

/// A clickable card action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PotentialAction {
    /// Action type tag.
    #[serde(rename = "type")]
    pub action_type: &'static str,
    /// Button label.
    pub name: String,
    /// Target URLs.
    pub target: Vec<String>,
}

impl PotentialAction {
    /// Creates a `ViewAction` that opens a single URL.
    #[must_use]
    pub fn view(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            action_type: VIEW_ACTION,
            name: name.into(),
            target: vec![target.into()],
        }
    }
}
