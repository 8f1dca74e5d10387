//! Severity levels.

use std::fmt;

/// Severity level of a log event.
///
/// The six well-known Seq levels have their own variants. Anything else the
/// host sends is kept verbatim in [`Level::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Level {
    /// Verbose (trace) level.
    Verbose,
    /// Debug level.
    Debug,
    /// Information level. This is the CLEF default when `@l` is absent.
    #[default]
    Information,
    /// Warning level.
    Warning,
    /// Error level.
    Error,
    /// Fatal (critical) level.
    Fatal,
    /// A level name outside the known set.
    Other(String),
}

impl Level {
    /// Parses a level name, accepting the common aliases case-insensitively.
    ///
    /// Unrecognized names are preserved as [`Level::Other`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "verbose" | "trace" | "vrb" => Self::Verbose,
            "debug" | "dbg" => Self::Debug,
            "information" | "info" | "inf" => Self::Information,
            "warning" | "warn" | "wrn" => Self::Warning,
            "error" | "err" | "eror" => Self::Error,
            "fatal" | "critical" | "crit" | "ftl" => Self::Fatal,
            _ => Self::Other(name.to_string()),
        }
    }

    /// Returns the display label used in card titles and bodies.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Verbose => "Verbose",
            Self::Debug => "Debug",
            Self::Information => "Information",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Fatal => "Fatal",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Returns the card theme color used when no override is configured.
    ///
    /// Unknown levels fall back to `gray`.
    #[must_use]
    pub const fn default_color(&self) -> &'static str {
        match self {
            Self::Verbose | Self::Debug | Self::Other(_) => "gray",
            Self::Information => "green",
            Self::Warning => "yellow",
            Self::Error | Self::Fatal => "red",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_names() {
        assert_eq!(Level::parse("Verbose"), Level::Verbose);
        assert_eq!(Level::parse("Debug"), Level::Debug);
        assert_eq!(Level::parse("Information"), Level::Information);
        assert_eq!(Level::parse("Warning"), Level::Warning);
        assert_eq!(Level::parse("Error"), Level::Error);
        assert_eq!(Level::parse("Fatal"), Level::Fatal);
    }

    #[test]
    fn parse_aliases_case_insensitively() {
        assert_eq!(Level::parse("TRACE"), Level::Verbose);
        assert_eq!(Level::parse("info"), Level::Information);
        assert_eq!(Level::parse("Warn"), Level::Warning);
        assert_eq!(Level::parse(" err "), Level::Error);
        assert_eq!(Level::parse("Critical"), Level::Fatal);
    }

    #[test]
    fn parse_unknown_keeps_original_name() {
        let level = Level::parse("Notice");
        assert_eq!(level, Level::Other("Notice".to_string()));
        assert_eq!(level.as_str(), "Notice");
    }

    #[test]
    fn default_colors_follow_severity() {
        let expected = [
            (Level::Verbose, "gray"),
            (Level::Debug, "gray"),
            (Level::Information, "green"),
            (Level::Warning, "yellow"),
            (Level::Error, "red"),
            (Level::Fatal, "red"),
        ];

        for (level, color) in expected {
            assert_eq!(level.default_color(), color, "color for {level}");
        }
    }

    #[test]
    fn unknown_level_defaults_to_gray() {
        assert_eq!(Level::Other("Notice".into()).default_color(), "gray");
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Level::Warning.to_string(), "Warning");
    }

    #[test]
    fn default_is_information() {
        assert_eq!(Level::default(), Level::Information);
    }
}
