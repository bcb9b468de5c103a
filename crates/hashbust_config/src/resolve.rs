//! Validation of a raw configuration and resolution against the working directory.

use std::path::{Component, Path, PathBuf};

use hashbust_common::HashLength;

use crate::error::ConfigError;
use crate::types::{BustConfig, RawConfig};

/// Validates `raw` in a single pass and resolves it into a [`BustConfig`].
///
/// Every blank required field is collected before failing, so the error lists
/// all of them. Relative `source`, `target` and `publicPath` values are taken
/// relative to `work_dir`.
pub fn resolve_config(raw: RawConfig, work_dir: &Path) -> Result<BustConfig, ConfigError> {
    let mut missing = Vec::new();
    let source = required(raw.source, "source", &mut missing);
    let target = required(raw.target, "target", &mut missing);
    let public_path = required(raw.public_path, "publicPath", &mut missing);

    let (Some(source), Some(target), Some(public_path)) = (source, target, public_path) else {
        return Err(ConfigError::MissingFields(missing));
    };

    let url = raw
        .url
        .filter(|u| !is_blank(u))
        .map(|u| u.strip_suffix('/').map(str::to_string).unwrap_or(u));

    Ok(BustConfig {
        source: absolute(work_dir, &source).to_string_lossy().into_owned(),
        target: absolute(work_dir, &target).to_string_lossy().into_owned(),
        public_path: absolute(work_dir, &public_path),
        url,
        hash_length: raw
            .hash_length
            .map(HashLength::clamped)
            .unwrap_or_default(),
    })
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn required(value: Option<String>, name: &str, missing: &mut Vec<String>) -> Option<String> {
    match value {
        Some(v) if !is_blank(&v) => Some(v),
        _ => {
            missing.push(name.to_string());
            None
        }
    }
}

/// Joins `path` onto `base` unless it is already absolute, then removes `.`
/// and `..` components lexically.
fn absolute(base: &Path, path: &str) -> PathBuf {
    let joined = base.join(path);
    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
