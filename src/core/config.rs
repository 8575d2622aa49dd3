//! Configuration module for `StudyFlow`
//!
//! Persistent CLI configuration stored as TOML in the platform config
//! directory. Embedded defaults (separate for debug and release builds) seed
//! the file on first run and fill in fields added by upgrades. Values may
//! reference the config directory as `$STUDY_FLOW`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");
#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");
#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Record-storage configuration
///
/// Credentials for the remote record-storage service. Both fields may stay
/// empty when only local gradebook files are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage token/connection string
    #[serde(default)]
    pub token: String,
    /// Storage endpoint
    #[serde(default)]
    pub endpoint: String,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding local gradebook data files
    #[serde(default)]
    pub data_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Record-storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override storage token
    pub storage_token: Option<String>,
    /// Override storage endpoint
    pub storage_endpoint: Option<String>,
    /// Override gradebook data directory
    pub data_dir: Option<String>,
}

/// Copy `default` into `target` when `target` is empty and `default` is not.
/// Returns whether `target` changed.
fn fill_if_empty(target: &mut String, default: &str) -> bool {
    if target.is_empty() && !default.is_empty() {
        default.clone_into(target);
        true
    } else {
        false
    }
}

impl Config {
    /// The `$STUDY_FLOW` directory:
    /// - Linux: `~/.config/studyflow`
    /// - macOS: `~/Library/Application Support/studyflow`
    /// - Windows: `%APPDATA%\studyflow`
    #[must_use]
    pub fn get_studyflow_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studyflow")
    }

    /// The user config file path (`config.toml`, or `dconfig.toml` in debug
    /// builds so a debug config can live alongside the real one)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_studyflow_dir().join(CONFIG_FILE_NAME)
    }

    /// Fill empty fields from `defaults`, returning whether anything changed
    ///
    /// Run after loading so that config fields introduced by an upgrade get
    /// their default values without clobbering user settings.
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let filled = [
            fill_if_empty(&mut self.logging.level, &defaults.logging.level),
            fill_if_empty(&mut self.logging.file, &defaults.logging.file),
            fill_if_empty(&mut self.storage.token, &defaults.storage.token),
            fill_if_empty(&mut self.storage.endpoint, &defaults.storage.endpoint),
            fill_if_empty(&mut self.paths.data_dir, &defaults.paths.data_dir),
        ];
        filled.iter().any(|changed| *changed)
    }

    /// Apply CLI-provided overrides for this run only
    ///
    /// Only `Some` values replace config values; the persistent file is not
    /// touched.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        let assignments = [
            (&overrides.level, &mut self.logging.level),
            (&overrides.file, &mut self.logging.file),
            (&overrides.storage_token, &mut self.storage.token),
            (&overrides.storage_endpoint, &mut self.storage.endpoint),
            (&overrides.data_dir, &mut self.paths.data_dir),
        ];
        for (value, slot) in assignments {
            if let Some(value) = value {
                slot.clone_from(value);
            }
        }

        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
    }

    /// Replace `$STUDY_FLOW` with the actual config directory path
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$STUDY_FLOW") {
            let dir = Self::get_studyflow_dir();
            value.replace("$STUDY_FLOW", dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Parse a TOML configuration string, expanding `$STUDY_FLOW` in values
    ///
    /// Missing fields use their serde defaults (empty strings / false).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        for value in [
            &mut config.logging.file,
            &mut config.storage.token,
            &mut config.storage.endpoint,
            &mut config.paths.data_dir,
        ] {
            *value = Self::expand_variables(value);
        }

        Ok(config)
    }

    /// The compiled-in defaults for this build profile
    ///
    /// # Panics
    ///
    /// Panics if the embedded default configuration is invalid TOML, which
    /// cannot happen for a correctly built binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load the config file, or create it from defaults on first run
    ///
    /// An existing file is merged with the defaults (and re-saved when the
    /// merge added fields). Any read or parse failure falls back to the
    /// defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            // First run: materialize the defaults on disk
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        let Ok(content) = fs::read_to_string(&config_file) else {
            return defaults;
        };
        let Ok(mut config) = Self::from_toml(&content) else {
            return defaults;
        };

        if config.merge_defaults(&defaults) {
            let _ = config.save();
        }
        config
    }

    /// Write the configuration to the platform config file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails, the config directory cannot
    /// be created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Read a configuration value by key
    ///
    /// Keys: `level`, `file`, `verbose`, `token`, `endpoint`, `data_dir`.
    /// Returns `None` for unrecognized keys.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "token" => Some(self.storage.token.clone()),
            "endpoint" => Some(self.storage.endpoint.clone()),
            "data_dir" | "data-dir" => Some(self.paths.data_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key (in memory; call
    /// [`save()`](Config::save) to persist)
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed (e.g., a non-boolean for `verbose`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "token" => self.storage.token = value.to_string(),
            "endpoint" => self.storage.endpoint = value.to_string(),
            "data_dir" | "data-dir" => self.paths.data_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset one configuration value to its default (in memory; call
    /// [`save()`](Config::save) to persist)
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "token" => self.storage.token.clone_from(&defaults.storage.token),
            "endpoint" => self.storage.endpoint.clone_from(&defaults.storage.endpoint),
            "data_dir" | "data-dir" => self.paths.data_dir.clone_from(&defaults.paths.data_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete the config file so the next [`load()`](Config::load) recreates
    /// it from defaults
    ///
    /// Destructive; the CLI asks for confirmation before calling this.
    /// Succeeds silently when no config file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[storage]")?;
        writeln!(f, "  token = \"{}\"", self.storage.token)?;
        writeln!(f, "  endpoint = \"{}\"", self.storage.endpoint)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_dir = \"{}\"", self.paths.data_dir)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_if_empty_only_touches_empty_targets() {
        let mut target = String::new();
        assert!(fill_if_empty(&mut target, "default"));
        assert_eq!(target, "default");

        // Non-empty target keeps its value
        assert!(!fill_if_empty(&mut target, "other"));
        assert_eq!(target, "default");

        // Empty default changes nothing
        let mut empty = String::new();
        assert!(!fill_if_empty(&mut empty, ""));
        assert!(empty.is_empty());
    }

    #[test]
    fn expand_variables_leaves_plain_values_alone() {
        assert_eq!(Config::expand_variables("/plain/path"), "/plain/path");
        assert!(!Config::expand_variables("$STUDY_FLOW/data").contains("$STUDY_FLOW"));
    }
}
