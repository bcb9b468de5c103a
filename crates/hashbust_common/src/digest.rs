//! Content digests for cache busting.

use sha2::{Digest, Sha256};
use std::fmt;

use crate::hash_length::HashLength;

/// A SHA-256 digest of an asset's bytes.
///
/// Two files with the same `ContentDigest` are assumed to have identical
/// content. The digest depends only on the bytes, never on the file name or
/// location, so an unchanged asset always maps to the same hashed name.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// Computes a content digest from a byte slice using SHA-256.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hasher.finalize());
        Self(bytes)
    }

    /// Returns the first `length` lowercase hex characters of the digest.
    ///
    /// This is the fragment embedded into hashed file names.
    pub fn prefix(&self, length: HashLength) -> String {
        let mut hex = hex::encode(self.0);
        hex.truncate(length.get());
        hex
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentDigest({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}
