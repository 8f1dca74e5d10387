//! Compact Log Event Format (CLEF) parsing.
//!
//! Seq feeds events to executable apps as newline-delimited JSON objects.
//! Reserved fields start with `@`; everything else is a user property.
//!
//! | Field    | Meaning                                   |
//! |----------|-------------------------------------------|
//! | `@seqid` | Seq event id (falls back to `@i`)         |
//! | `@l`     | Level name (absent means `Information`)   |
//! | `@m`     | Rendered message                          |
//! | `@mt`    | Message template, rendered if `@m` absent |
//! | `@t`     | Timestamp                                 |
//! | `@x`     | Exception text, appended to the message   |

use serde_json::{Map, Value};

use super::{EventParseError, Level, LogEvent};

/// Parses one CLEF line into a [`LogEvent`].
///
/// # Errors
///
/// Returns [`EventParseError`] if the line is not a JSON object.
pub fn parse_clef(line: &str) -> Result<LogEvent, EventParseError> {
    let Value::Object(fields) = serde_json::from_str::<Value>(line)? else {
        return Err(EventParseError::NotAnObject);
    };

    let id = fields
        .get("@seqid")
        .or_else(|| fields.get("@i"))
        .map(display_value)
        .unwrap_or_default();

    let level = fields
        .get("@l")
        .and_then(Value::as_str)
        .map(Level::parse)
        .unwrap_or_default();

    let mut rendered_message = if let Some(message) = fields.get("@m") {
        display_value(message)
    } else if let Some(template) = fields.get("@mt").and_then(Value::as_str) {
        render_template(template, &user_properties(&fields))
    } else {
        String::new()
    };

    if let Some(exception) = fields.get("@x").and_then(Value::as_str) {
        rendered_message.push('\n');
        rendered_message.push_str(exception);
    }

    Ok(LogEvent {
        id,
        level,
        rendered_message,
        timestamp: fields.get("@t").map(display_value),
    })
}

/// Renders a message template against a property map.
///
/// Holes may carry a `@`/`$` capturing hint, a `,alignment` or a `:format`
/// suffix; all of these are ignored and the raw property value is written.
/// Holes naming unknown properties are kept verbatim. `{{` and `}}` render
/// as literal braces.
#[must_use]
pub fn render_template(template: &str, properties: &Map<String, Value>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let Some(end) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };

        match lookup_hole(&tail[1..end], properties) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }

    out.push_str(rest);
    out
}

fn lookup_hole(hole: &str, properties: &Map<String, Value>) -> Option<String> {
    let name = hole
        .trim_start_matches(['@', '$'])
        .split([':', ','])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() {
        return None;
    }

    properties.get(name).map(display_value)
}

/// Collects non-reserved fields. A leading `@@` escapes a property whose
/// real name starts with `@`.
fn user_properties(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .filter_map(|(key, value)| {
            if let Some(escaped) = key.strip_prefix("@@") {
                Some((format!("@{escaped}"), value.clone()))
            } else if key.starts_with('@') {
                None
            } else {
                Some((key.clone(), value.clone()))
            }
        })
        .collect()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
