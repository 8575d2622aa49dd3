//! CLI command handlers

pub mod calendar;
pub mod config;
pub mod gpa;
pub mod roster;

use study_flow::config::Config;
use study_flow::core::gradebook::{parse_gradebook_toml, Gradebook};
use std::path::{Path, PathBuf};

/// Default gradebook file name inside the configured data directory
const DEFAULT_GRADEBOOK_FILE: &str = "gradebook.toml";

/// Resolve the gradebook path: explicit argument, or the config data_dir
pub fn resolve_gradebook_path(input_file: Option<&Path>, config: &Config) -> PathBuf {
    input_file.map_or_else(
        || PathBuf::from(&config.paths.data_dir).join(DEFAULT_GRADEBOOK_FILE),
        Path::to_path_buf,
    )
}

/// Load a gradebook, reporting failures the way command handlers expect
pub fn load_gradebook(input_file: Option<&Path>, config: &Config) -> Result<Gradebook, String> {
    let path = resolve_gradebook_path(input_file, config);
    parse_gradebook_toml(&path).map_err(|e| format!("✗ Failed to load {}: {e}", path.display()))
}
