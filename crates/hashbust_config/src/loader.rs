//! Configuration file loading and validation.

use std::path::Path;

use crate::error::ConfigError;
use crate::resolve::resolve_config;
use crate::types::{BustConfig, RawConfig};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".cache-buster.json";

/// Loads and validates `<work_dir>/.cache-buster.json`.
pub fn load_config(work_dir: &Path) -> Result<BustConfig, ConfigError> {
    load_config_from_path(&work_dir.join(CONFIG_FILE_NAME), work_dir)
}

/// Loads and validates a configuration file at an explicit path.
///
/// Relative paths inside the file are still resolved against `work_dir`.
pub fn load_config_from_path(path: &Path, work_dir: &Path) -> Result<BustConfig, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content, work_dir)
}

/// Parses and validates a configuration from a JSON string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str, work_dir: &Path) -> Result<BustConfig, ConfigError> {
    let raw: RawConfig =
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    resolve_config(raw, work_dir)
}
