//! CLI argument definitions for `StudyFlow`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use logger::Level;
use study_flow::config::ConfigOverrides;

/// Log level as accepted on the command line
///
/// Renders as a lowercase string for config storage and converts to
/// `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl LogLevelArg {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Calculate grade point averages from a gradebook.
    ///
    /// With --semester, reports that semester only; otherwise reports every
    /// semester found in the gradebook plus the overall GPA.
    Gpa {
        /// Path to a gradebook TOML file (defaults to `gradebook.toml` in the
        /// configured data directory)
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,

        /// Semester to scope the calculation to (e.g., "Fall 2024")
        #[arg(short, long, value_name = "NAME")]
        semester: Option<String>,
    },
    /// Show assignments grouped by due date.
    ///
    /// Defaults to the current month; use --month or --date to narrow the
    /// view.
    Calendar {
        /// Path to a gradebook TOML file (defaults to `gradebook.toml` in the
        /// configured data directory)
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,

        /// Month to display, as YYYY-MM
        #[arg(short, long, value_name = "YYYY-MM")]
        month: Option<String>,

        /// Single day to display, as YYYY-MM-DD
        #[arg(short, long, value_name = "YYYY-MM-DD")]
        date: Option<String>,
    },
    /// List the students in a gradebook.
    Roster {
        /// Path to a gradebook TOML file (defaults to `gradebook.toml` in the
        /// configured data directory)
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "studyflow",
    about = "StudyFlow command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config storage token
    #[arg(long = "config-storage-token", value_name = "TOKEN")]
    pub config_storage_token: Option<String>,

    /// Override config storage token (short form)
    #[arg(long = "storage-token", value_name = "TOKEN")]
    pub storage_token: Option<String>,

    /// Override config storage endpoint
    #[arg(long = "config-storage-endpoint", value_name = "URL")]
    pub config_storage_endpoint: Option<String>,

    /// Override config storage endpoint (short form)
    #[arg(long = "storage-endpoint", value_name = "URL")]
    pub storage_endpoint: Option<String>,

    /// Override config gradebook data directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config gradebook data directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--data-dir`) take precedence over long-form
    /// flags (e.g., `--config-data-dir`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None`
    /// means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            storage_token: self
                .storage_token
                .clone()
                .or_else(|| self.config_storage_token.clone()),
            storage_endpoint: self
                .storage_endpoint
                .clone()
                .or_else(|| self.config_storage_endpoint.clone()),
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_data_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_storage_token: None,
            storage_token: None,
            config_storage_endpoint: None,
            storage_endpoint: None,
            config_data_dir: None,
            data_dir: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli().to_config_overrides();

        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.storage_token.is_none());
        assert!(overrides.storage_endpoint.is_none());
        assert!(overrides.data_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli();
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.storage_token = Some("test-token".to_string());
        cli.storage_endpoint = Some("https://test.com".to_string());
        cli.data_dir = Some(PathBuf::from("/data"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.storage_token, Some("test-token".to_string()));
        assert_eq!(
            overrides.storage_endpoint,
            Some("https://test.com".to_string())
        );
        assert_eq!(overrides.data_dir, Some("/data".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let mut cli = bare_cli();
        cli.config_storage_token = Some("long-token".to_string());
        cli.storage_token = Some("short-token".to_string());
        cli.config_storage_endpoint = Some("https://long.com".to_string());
        cli.storage_endpoint = Some("https://short.com".to_string());
        cli.config_data_dir = Some(PathBuf::from("/long/data"));
        cli.data_dir = Some(PathBuf::from("/short/data"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.storage_token, Some("short-token".to_string()));
        assert_eq!(
            overrides.storage_endpoint,
            Some("https://short.com".to_string())
        );
        assert_eq!(overrides.data_dir, Some("/short/data".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let mut cli = bare_cli();
        cli.config_storage_token = Some("long-token".to_string());
        cli.config_storage_endpoint = Some("https://long.com".to_string());
        cli.config_data_dir = Some(PathBuf::from("/long/data"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.storage_token, Some("long-token".to_string()));
        assert_eq!(
            overrides.storage_endpoint,
            Some("https://long.com".to_string())
        );
        assert_eq!(overrides.data_dir, Some("/long/data".to_string()));
    }
}
