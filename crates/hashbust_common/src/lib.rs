//! Shared foundational types used across the hashbust workspace.
//!
//! This crate provides the content digest used to fingerprint assets, the
//! clamped digest length setting, and glob-based file matching.

#![warn(missing_docs)]

pub mod digest;
pub mod files;
pub mod hash_length;

pub use digest::ContentDigest;
pub use files::{match_files, FileMatchError};
pub use hash_length::HashLength;
