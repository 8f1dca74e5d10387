//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Seq host section
    #[serde(default)]
    pub seq: SeqSection,

    /// Teams webhook section
    #[serde(default)]
    pub teams: TeamsSection,
}

/// Seq host configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeqSection {
    /// Seq base URL, used for permalinks
    pub base_url: Option<String>,
}

/// Teams webhook configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamsSection {
    /// Incoming webhook URL
    pub webhook_url: Option<String>,

    /// Log successful deliveries too
    #[serde(default)]
    pub trace_message: bool,

    /// Card color override
    pub color: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# seq-teams Configuration File
#
# Every setting can also be given on the command line or through the
# SEQ_APP_SETTING_* environment variables set by the Seq host.

[seq]
# Seq base URL, used for permalinks to events in Teams messages (optional)
# Env: SEQ_APP_SETTING_BASEURL
# base_url = "https://seq.example.com"

[teams]
# Teams incoming webhook URL (required)
# Env: SEQ_APP_SETTING_TEAMSBASEURL
# webhook_url = "https://example.webhook.office.com/webhookb2/..."

# Log every delivery, including successful ones (default: false)
# Env: SEQ_APP_SETTING_TRACEMESSAGE
# trace_message = false

# Card color: "yellow", "red", "green", "purple", "gray", or any value Teams
# accepts (default: chosen from the event level)
# Env: SEQ_APP_SETTING_COLOR
# color = "purple"
"#
    .to_string()
}
