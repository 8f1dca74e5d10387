//! Tests for CLEF parsing and template rendering.

use serde_json::{Map, Value, json};

use super::{EventParseError, Level, parse_clef, render_template};

fn props(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

mod parsing {
    use super::*;

    #[test]
    fn parse_rendered_event() {
        let event = parse_clef(
            r#"{"@t":"2024-01-01T00:00:00Z","@seqid":"event-abc-123","@l":"Error","@m":"disk full"}"#,
        )
        .unwrap();

        assert_eq!(event.id, "event-abc-123");
        assert_eq!(event.level, Level::Error);
        assert_eq!(event.rendered_message, "disk full");
        assert_eq!(event.timestamp.as_deref(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn missing_level_defaults_to_information() {
        let event = parse_clef(r#"{"@seqid":"1","@m":"hello"}"#).unwrap();

        assert_eq!(event.level, Level::Information);
    }

    #[test]
    fn event_id_falls_back_to_at_i() {
        let event = parse_clef(r#"{"@i":"0xA1B2","@m":"x"}"#).unwrap();

        assert_eq!(event.id, "0xA1B2");
    }

    #[test]
    fn numeric_event_id_is_stringified() {
        let event = parse_clef(r#"{"@i":42,"@m":"x"}"#).unwrap();

        assert_eq!(event.id, "42");
    }

    #[test]
    fn seqid_wins_over_at_i() {
        let event = parse_clef(r#"{"@seqid":"seq-1","@i":"type","@m":"x"}"#).unwrap();

        assert_eq!(event.id, "seq-1");
    }

    #[test]
    fn missing_id_is_empty() {
        let event = parse_clef(r#"{"@m":"x"}"#).unwrap();

        assert!(event.id.is_empty());
    }

    #[test]
    fn template_rendered_when_message_absent() {
        let event = parse_clef(
            r#"{"@seqid":"1","@mt":"User {User} logged in from {Ip}","User":"alice","Ip":"10.0.0.1"}"#,
        )
        .unwrap();

        assert_eq!(event.rendered_message, "User alice logged in from 10.0.0.1");
    }

    #[test]
    fn rendered_message_preferred_over_template() {
        let event =
            parse_clef(r#"{"@m":"rendered","@mt":"template {X}","X":"value"}"#).unwrap();

        assert_eq!(event.rendered_message, "rendered");
    }

    #[test]
    fn exception_appended_on_new_line() {
        let event =
            parse_clef(r#"{"@m":"boom","@x":"System.Exception: bad\n   at Foo()"}"#).unwrap();

        assert_eq!(
            event.rendered_message,
            "boom\nSystem.Exception: bad\n   at Foo()"
        );
    }

    #[test]
    fn custom_level_preserved() {
        let event = parse_clef(r#"{"@l":"Notice","@m":"x"}"#).unwrap();

        assert_eq!(event.level, Level::Other("Notice".to_string()));
    }

    #[test]
    fn invalid_json_returns_error() {
        let result = parse_clef("not json");

        assert!(matches!(result, Err(EventParseError::Json(_))));
    }

    #[test]
    fn non_object_returns_error() {
        let result = parse_clef("[1, 2, 3]");

        assert!(matches!(result, Err(EventParseError::NotAnObject)));
    }

    #[test]
    fn capture_hint_does_not_match_escaped_property() {
        let event = parse_clef(r#"{"@mt":"value {@tag}","@@tag":"escaped"}"#).unwrap();

        // `{@tag}` is a capturing hint on `tag`, which does not exist.
        assert_eq!(event.rendered_message, "value {@tag}");
    }
}

mod templates {
    use super::*;

    #[test]
    fn substitutes_string_unquoted() {
        let rendered = render_template("Hello {Name}", &props(json!({"Name": "World"})));

        assert_eq!(rendered, "Hello World");
    }

    #[test]
    fn substitutes_non_string_as_json() {
        let rendered = render_template(
            "{Count} items, ok={Ok}, data={Data}",
            &props(json!({"Count": 3, "Ok": true, "Data": {"a": 1}})),
        );

        assert_eq!(rendered, r#"3 items, ok=true, data={"a":1}"#);
    }

    #[test]
    fn ignores_capture_hints_format_and_alignment() {
        let p = props(json!({"A": "a", "B": "b", "C": 1.5, "D": "d"}));
        let rendered = render_template("{@A} {$B} {C:0.00} {D,10}", &p);

        assert_eq!(rendered, "a b 1.5 d");
    }

    #[test]
    fn unknown_hole_kept_verbatim() {
        let rendered = render_template("value {Missing}", &Map::new());

        assert_eq!(rendered, "value {Missing}");
    }

    #[test]
    fn double_braces_are_escapes() {
        let rendered = render_template("{{literal}} {X}", &props(json!({"X": 1})));

        assert_eq!(rendered, "{literal} 1");
    }

    #[test]
    fn unclosed_hole_kept_verbatim() {
        let rendered = render_template("start {Unclosed", &props(json!({"Unclosed": 1})));

        assert_eq!(rendered, "start {Unclosed");
    }

    #[test]
    fn stray_closing_brace_kept() {
        let rendered = render_template("a } b", &Map::new());

        assert_eq!(rendered, "a } b");
    }

    #[test]
    fn empty_hole_kept_verbatim() {
        let rendered = render_template("a {} b", &Map::new());

        assert_eq!(rendered, "a {} b");
    }

    #[test]
    fn handles_multibyte_text() {
        let rendered = render_template("héllo {Name} ✓", &props(json!({"Name": "wörld"})));

        assert_eq!(rendered, "héllo wörld ✓");
    }
}
