//! Error types for target rewriting.

use std::path::PathBuf;

use hashbust_common::FileMatchError;

/// Errors that can occur while rewriting target files. All are fatal.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    /// A target file could not be read or written.
    #[error("failed to rewrite {path}: {source}")]
    Io {
        /// The target file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The target glob could not be expanded.
    #[error(transparent)]
    Match(#[from] FileMatchError),
}
