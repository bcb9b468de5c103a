//! Configuration types deserialized from `.cache-buster.json`.

use std::path::PathBuf;

use hashbust_common::HashLength;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer};

/// The configuration file as written by the user, before validation.
///
/// Every field is optional at this stage so that a single validation pass can
/// report all missing values at once instead of failing on the first one.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConfig {
    /// Glob matching the asset files to fingerprint.
    #[serde(default)]
    pub source: Option<String>,
    /// Glob matching the files whose references get rewritten.
    #[serde(default)]
    pub target: Option<String>,
    /// Root directory that asset references are relative to.
    #[serde(default)]
    pub public_path: Option<String>,
    /// Optional absolute URL prefix for rewritten references.
    #[serde(default)]
    pub url: Option<String>,
    /// Requested digest length, clamped to the supported range.
    #[serde(default, deserialize_with = "deserialize_hash_length")]
    pub hash_length: Option<i64>,
}

/// Validated, fully resolved configuration for one run.
///
/// Paths and glob patterns are absolute. Built once at startup by
/// [`resolve_config`](crate::resolve_config) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BustConfig {
    /// Absolute glob pattern for source assets.
    pub source: String,
    /// Absolute glob pattern for target files.
    pub target: String,
    /// Absolute public root directory.
    pub public_path: PathBuf,
    /// URL prefix without a trailing slash, if configured and non-blank.
    pub url: Option<String>,
    /// Digest length embedded into file names.
    pub hash_length: HashLength,
}

/// Deserializes `hashLength`, which may be written as a number or as a
/// string holding an integer.
///
/// Fractional numbers are truncated. Anything else that is not an integer is
/// rejected so a typo fails the parse instead of silently picking a length.
fn deserialize_hash_length<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct IntOrString;

    impl<'de> Visitor<'de> for IntOrString {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("an integer or a string containing an integer")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(i64::try_from(v).unwrap_or(i64::MAX)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            if v.is_finite() {
                Ok(Some(v.trunc() as i64))
            } else {
                Err(E::invalid_value(de::Unexpected::Float(v), &self))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    deserializer.deserialize_any(IntOrString)
}
