//! Tests for `CardBuilder`.

use super::{CardBuilder, MAX_TEXT_CHARS, permalink};
use crate::event::{Level, LogEvent};

const BASE_URL: &str = "https://seq.example.com";

fn event(level: Level, message: &str) -> LogEvent {
    LogEvent::new("event-1", level, message)
}

/// Body text as it would be before truncation.
fn untruncated(level: &str, id: &str, message: &str) -> String {
    format!(
        "** {level} :** <a href={}> link </a> {message} ",
        permalink(BASE_URL, id)
    )
}

mod permalinks {
    use super::*;

    #[test]
    fn embeds_id_in_filter() {
        let link = permalink(BASE_URL, "abc-123");

        assert_eq!(
            link,
            "https://seq.example.com/#/events?filter=@Id%20%3D%3D%20%22abc-123%22&show=expanded"
        );
    }

    #[test]
    fn empty_base_url_still_builds_link() {
        let link = permalink("", "abc-123");

        assert_eq!(
            link,
            "/#/events?filter=@Id%20%3D%3D%20%22abc-123%22&show=expanded"
        );
    }

    #[test]
    fn action_target_is_single_permalink() {
        let builder = CardBuilder::new(BASE_URL);
        let card = builder.build(&LogEvent::new("xyz-9", Level::Debug, "m"));

        assert_eq!(card.potential_action.len(), 1);
        let action = &card.potential_action[0];
        assert_eq!(action.action_type, "ViewAction");
        assert_eq!(action.name, "Click here to open in Seq");
        assert_eq!(action.target, vec![permalink(BASE_URL, "xyz-9")]);
        assert!(action.target[0].contains("%22xyz-9%22"));
    }
}

mod colors {
    use super::*;

    #[test]
    fn default_colors_per_level() {
        let builder = CardBuilder::new(BASE_URL);
        let expected = [
            (Level::Verbose, "gray"),
            (Level::Debug, "gray"),
            (Level::Information, "green"),
            (Level::Warning, "yellow"),
            (Level::Error, "red"),
            (Level::Fatal, "red"),
        ];

        for (level, color) in expected {
            let card = builder.build(&event(level.clone(), "m"));
            assert_eq!(card.theme_color, color, "theme color for {level}");
        }
    }

    #[test]
    fn override_wins_for_every_level() {
        let builder = CardBuilder::new(BASE_URL).with_color("#ff00ff");
        let levels = [
            Level::Verbose,
            Level::Debug,
            Level::Information,
            Level::Warning,
            Level::Error,
            Level::Fatal,
            Level::Other("Custom".into()),
        ];

        for level in levels {
            assert_eq!(builder.build(&event(level, "m")).theme_color, "#ff00ff");
        }
    }

    #[test]
    fn purple_override_on_warning() {
        let builder = CardBuilder::new(BASE_URL).with_color("purple");
        let card = builder.build(&event(Level::Warning, "careful"));

        assert_eq!(card.theme_color, "purple");
        assert_eq!(card.title, "<span style='color:purple'>Warning</span>");
    }

    #[test]
    fn blank_override_falls_back_to_level_color() {
        let builder = CardBuilder::new(BASE_URL).with_color("   ");

        assert_eq!(builder.color(), None);
        assert_eq!(builder.build(&event(Level::Warning, "m")).theme_color, "yellow");
    }

    #[test]
    fn unknown_level_without_override_is_gray() {
        let card = CardBuilder::new(BASE_URL).build(&event(Level::Other("Notice".into()), "m"));

        assert_eq!(card.theme_color, "gray");
        assert_eq!(card.title, "<span style='color:gray'>Notice</span>");
    }
}

mod text {
    use super::*;

    #[test]
    fn error_event_end_to_end() {
        let builder = CardBuilder::new(BASE_URL);
        let card = builder.build(&LogEvent::new("abc-123", Level::Error, "disk full"));

        assert_eq!(card.theme_color, "red");
        assert_eq!(card.title, "<span style='color:red'>Error</span>");
        assert!(card.text.starts_with("** Error :**"));
        assert!(card.text.contains("abc-123"));
        assert_eq!(card.text, untruncated("Error", "abc-123", "disk full"));
    }

    #[test]
    fn short_text_is_unchanged() {
        let builder = CardBuilder::new(BASE_URL);

        for len in [0, 1, 100, 500] {
            let message = "x".repeat(len);
            let card = builder.build(&event(Level::Information, &message));
            assert_eq!(card.text, untruncated("Information", "event-1", &message));
        }
    }

    #[test]
    fn text_at_limit_is_unchanged() {
        let builder = CardBuilder::new(BASE_URL);
        let overhead = untruncated("Information", "event-1", "").chars().count();
        let message = "y".repeat(MAX_TEXT_CHARS - overhead);

        let card = builder.build(&event(Level::Information, &message));

        assert_eq!(card.text.chars().count(), MAX_TEXT_CHARS);
        assert_eq!(card.text, untruncated("Information", "event-1", &message));
    }

    #[test]
    fn long_text_is_cut_to_prefix() {
        let builder = CardBuilder::new(BASE_URL);

        for len in [1000, 1001, 5000] {
            let message = "z".repeat(len);
            let full = untruncated("Error", "event-1", &message);
            let card = builder.build(&event(Level::Error, &message));

            assert_eq!(card.text.chars().count(), MAX_TEXT_CHARS);
            assert!(full.starts_with(&card.text));
        }
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        let builder = CardBuilder::new(BASE_URL);
        let message = "é✓".repeat(1000);
        let full = untruncated("Warning", "event-1", &message);

        let card = builder.build(&event(Level::Warning, &message));

        assert_eq!(card.text.chars().count(), MAX_TEXT_CHARS);
        assert!(full.starts_with(&card.text));
    }
}

mod serialization {
    use super::*;

    #[test]
    fn card_serializes_in_connector_schema() {
        let card = CardBuilder::new(BASE_URL).build(&LogEvent::new("abc", Level::Fatal, "down"));
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["@type"], "MessageCard");
        assert_eq!(json["@context"], "http://schema.org/extensions");
        assert_eq!(json["themeColor"], "red");
        assert_eq!(json["title"], "<span style='color:red'>Fatal</span>");
        assert_eq!(json["potentialAction"][0]["type"], "ViewAction");
        assert_eq!(
            json["potentialAction"][0]["name"],
            "Click here to open in Seq"
        );
        assert_eq!(
            json["potentialAction"][0]["target"][0],
            permalink(BASE_URL, "abc")
        );
        assert!(json["text"].as_str().unwrap().starts_with("** Fatal :**"));
    }
}
