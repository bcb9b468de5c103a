//! Error types for manifest construction.

use std::path::PathBuf;

use hashbust_common::FileMatchError;

/// Errors that can occur while hashing and renaming source assets.
///
/// Every variant is fatal to the run. Renames performed before the failure
/// are not rolled back.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// A source file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A source file could not be moved to its hashed name.
    #[error("failed to rename {from} to {to}: {source}")]
    Rename {
        /// The original file path.
        from: PathBuf,
        /// The hashed destination path.
        to: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A path is not valid UTF-8 and cannot be used as a textual reference.
    #[error("path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),

    /// The source glob could not be expanded.
    #[error(transparent)]
    Match(#[from] FileMatchError),
}
