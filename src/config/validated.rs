//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// Loaded once at startup and never modified afterwards.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Seq base URL for permalinks, used verbatim (may be empty)
    pub base_url: String,

    /// Teams webhook URL (required, http or https)
    pub webhook_url: Url,

    /// Whether successful deliveries are logged
    pub trace_message: bool,

    /// Card color override, trimmed and non-blank
    pub color: Option<String>,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base_url = if self.base_url.is_empty() {
            "none"
        } else {
            self.base_url.as_str()
        };

        // The webhook path carries the secret token, only show the origin.
        write!(
            f,
            "Config {{ webhook: {}, base_url: {}, trace_message: {}, color: {} }}",
            self.webhook_url.origin().ascii_serialization(),
            base_url,
            self.trace_message,
            self.color.as_deref().unwrap_or("auto"),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments (and environment variables) take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The webhook URL is missing
    /// - The webhook URL is invalid or not http(s)
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let webhook_url = Self::resolve_webhook_url(cli, toml)?;

        let base_url = cli
            .base_url
            .clone()
            .or_else(|| toml.and_then(|t| t.seq.base_url.clone()))
            .unwrap_or_else(|| defaults::BASE_URL.to_string());

        let trace_message = cli.trace_message || toml.is_some_and(|t| t.teams.trace_message);

        let color = Self::resolve_color(cli, toml);

        Ok(Self {
            base_url,
            webhook_url,
            trace_message,
            color,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_webhook_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        let url_str = cli
            .webhook_url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.teams.webhook_url.as_deref()))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                ConfigError::missing(
                    field::WEBHOOK_URL,
                    "Use --webhook-url, SEQ_APP_SETTING_TEAMSBASEURL or set teams.webhook_url in config file",
                )
            })?;

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            url: url_str.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ConfigError::UnsupportedScheme {
                url: url_str.to_string(),
                scheme: scheme.to_string(),
            }),
        }
    }

    fn resolve_color(cli: &Cli, toml: Option<&TomlConfig>) -> Option<String> {
        // A blank CLI/env value does not mask the TOML value.
        [
            cli.color.as_deref(),
            toml.and_then(|t| t.teams.color.as_deref()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|c| !c.is_empty())
        .map(ToString::to_string)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
