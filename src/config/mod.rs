//! Configuration layer for seq-teams.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **Environment variables** - the `SEQ_APP_SETTING_*` variables set by the Seq host
//! 3. **TOML config file**
//! 4. **Built-in defaults**
//!
//! CLI and environment are merged by clap before validation, so from the
//! validator's point of view they are a single source.
//!
//! # Boolean Flag Semantics
//!
//! `trace_message` uses OR semantics: if set `true` in either the CLI/environment
//! or TOML, the result is `true`. Flags only enable, never disable.
//!
//! # Color
//!
//! The override color is trimmed; a blank value means "no override", in which
//! case each card is colored by its event level.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
