//! Tests for CLI argument parsing.

use std::path::PathBuf;

use super::cli::{Cli, Command};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_args() {
        let cli = Cli::parse_from_iter([
            "seq-teams",
            "--webhook-url",
            "https://example.webhook.office.com/webhookb2/abc",
        ]);

        assert_eq!(
            cli.webhook_url.as_deref(),
            Some("https://example.webhook.office.com/webhookb2/abc")
        );
        assert!(cli.base_url.is_none());
        assert!(!cli.trace_message);
        assert!(cli.color.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_all_settings() {
        let cli = Cli::parse_from_iter([
            "seq-teams",
            "--webhook-url",
            "https://hook",
            "--base-url",
            "https://seq.example.com",
            "--trace-message",
            "--color",
            "purple",
            "--config",
            "custom.toml",
            "--verbose",
        ]);

        assert_eq!(cli.base_url.as_deref(), Some("https://seq.example.com"));
        assert!(cli.trace_message);
        assert_eq!(cli.color.as_deref(), Some("purple"));
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn parse_short_flags() {
        let cli = Cli::parse_from_iter(["seq-teams", "-c", "a.toml", "-v"]);

        assert_eq!(cli.config, Some(PathBuf::from("a.toml")));
        assert!(cli.verbose);
    }
}

mod init_command {
    use super::*;

    #[test]
    fn init_uses_default_output() {
        let cli = Cli::parse_from_iter(["seq-teams", "init"]);

        match cli.command {
            Some(Command::Init { output }) => assert_eq!(output, PathBuf::from("seq-teams.toml")),
            other => panic!("expected init, got {other:?}"),
        }
    }

    #[test]
    fn init_accepts_custom_output() {
        let cli = Cli::parse_from_iter(["seq-teams", "init", "-o", "out.toml"]);

        match cli.command {
            Some(Command::Init { output }) => assert_eq!(output, PathBuf::from("out.toml")),
            other => panic!("expected init, got {other:?}"),
        }
    }

    #[test]
    fn run_mode_is_not_init() {
        let cli = Cli::parse_from_iter(["seq-teams"]);

        assert!(cli.command.is_none());
    }
}
