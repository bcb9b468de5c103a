//! Parsing and validation of `.cache-buster.json` configuration files.
//!
//! This crate reads the configuration file and produces a strongly-typed
//! [`BustConfig`] with resolved paths, a normalized URL prefix, and a clamped
//! digest length.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_path, load_config_from_str, CONFIG_FILE_NAME};
pub use resolve::resolve_config;
pub use types::*;
