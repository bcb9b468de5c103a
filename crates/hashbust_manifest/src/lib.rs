//! Asset manifest construction.
//!
//! This crate hashes source assets, derives their cache-busted names, renames
//! them on disk, and records the original-to-hashed mapping that the rewrite
//! pass applies to target files.

#![warn(missing_docs)]

pub mod builder;
pub mod error;
pub mod hasher;
pub mod manifest;
pub mod mapper;
pub mod ordering;

pub use builder::{BuildOutput, ManifestBuilder, RenamePlan};
pub use error::ManifestError;
pub use hasher::SourceHasher;
pub use manifest::{Manifest, ManifestEntry};
pub use mapper::{MappedPath, MappingMode, ParsedPath, PathMapper};
pub use ordering::resolve_order;
