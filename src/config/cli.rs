//! CLI argument parsing using clap.
//!
//! Every setting can also come from the `SEQ_APP_SETTING_*` environment
//! variables the Seq host sets for app instances.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};

use super::defaults;

/// seq-teams: forwards Seq log events to Microsoft Teams
///
/// Reads CLEF events from stdin, one JSON object per line, and posts a
/// message card for each to a Teams incoming webhook.
#[derive(Debug, Parser)]
#[command(name = "seq-teams")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Seq base URL, used for permalinks to events
    #[arg(long = "base-url", env = "SEQ_APP_SETTING_BASEURL")]
    pub base_url: Option<String>,

    /// Teams incoming webhook URL (required for run mode)
    #[arg(long = "webhook-url", env = "SEQ_APP_SETTING_TEAMSBASEURL")]
    pub webhook_url: Option<String>,

    /// Log every delivery, including successful ones
    #[arg(
        long = "trace-message",
        env = "SEQ_APP_SETTING_TRACEMESSAGE",
        value_parser = BoolishValueParser::new()
    )]
    pub trace_message: bool,

    /// Card color override, e.g. "yellow", "red", "green", "purple", "gray"
    /// (default: chosen from the event level)
    #[arg(long, env = "SEQ_APP_SETTING_COLOR")]
    pub color: Option<String>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for seq-teams
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
