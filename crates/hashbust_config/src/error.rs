//! Error types for configuration loading and validation.

use std::path::PathBuf;

/// Errors that can occur when loading or validating a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file does not exist. Carries the path that was tried.
    #[error("Configuration file does not exist")]
    NotFound(PathBuf),

    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The JSON content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// One or more required fields are missing or blank.
    #[error("Missing variables {} in configuration", .0.join(", "))]
    MissingFields(Vec<String>),
}
