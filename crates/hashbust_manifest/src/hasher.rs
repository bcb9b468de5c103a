//! Source file hashing.
//!
//! Produces the digest fragment embedded into a cache-busted file name. The
//! fragment depends only on file content, so renaming or moving an asset does
//! not change it.

use std::path::Path;

use hashbust_common::{ContentDigest, HashLength};

use crate::error::ManifestError;

/// Utility for computing the digest fragments of source assets.
pub struct SourceHasher;

impl SourceHasher {
    /// Returns the first `length` hex characters of the SHA-256 of `bytes`.
    pub fn digest_hex(bytes: &[u8], length: HashLength) -> String {
        ContentDigest::from_bytes(bytes).prefix(length)
    }

    /// Reads a single file and returns its digest fragment of `length` characters.
    pub fn hash_file(path: &Path, length: HashLength) -> Result<String, ManifestError> {
        let content = std::fs::read(path).map_err(|e| ManifestError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::digest_hex(&content, length))
    }
}
