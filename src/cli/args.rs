//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// ExamScribe - dictate structured exam documents
#[derive(Parser, Debug)]
#[command(name = "exam-scribe")]
#[command(version)]
#[command(about = "Voice dictation interpreter for structured exam transcripts")]
#[command(long_about = None)]
pub struct Cli {
    /// Transcript file path (defaults to the XDG data directory)
    #[arg(short = 'p', long, value_name = "FILE")]
    pub data_path: Option<String>,

    /// Start the session with listening already on
    #[arg(short = 'l', long)]
    pub listen: bool,

    /// Subcommand; without one, an interactive session starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the stored transcript and exit
    Show,
    /// Delete the stored transcript
    Clear,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Resolved options for a session or one-shot run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub data_path: Option<String>,
    pub auto_listen: bool,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["data_path", "auto_listen"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

/// Parse a boolean value
pub fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["exam-scribe"]);
        assert!(cli.data_path.is_none());
        assert!(!cli.listen);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_data_path_and_listen() {
        let cli = Cli::parse_from(["exam-scribe", "-p", "/tmp/t.json", "--listen"]);
        assert_eq!(cli.data_path, Some("/tmp/t.json".to_string()));
        assert!(cli.listen);
    }

    #[test]
    fn cli_parses_show_and_clear() {
        let cli = Cli::parse_from(["exam-scribe", "show"]);
        assert!(matches!(cli.command, Some(Commands::Show)));

        let cli = Cli::parse_from(["exam-scribe", "clear"]);
        assert!(matches!(cli.command, Some(Commands::Clear)));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["exam-scribe", "config", "set", "auto_listen", "true"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "auto_listen");
            assert_eq!(value, "true");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("data_path"));
        assert!(is_valid_config_key("auto_listen"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("YES"), Ok(true));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("on"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("off"), Ok(false));
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
