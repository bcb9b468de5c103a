//! Reference rewriting in target files.
//!
//! Applies an ordered list of manifest entries to every file matched by the
//! target glob and reports which files changed.

#![warn(missing_docs)]

pub mod engine;
pub mod error;

pub use engine::{changed_files, ChangeRecord, ReplacementEngine, RewriteOutcome};
pub use error::RewriteError;
