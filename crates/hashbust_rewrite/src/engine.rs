//! Literal find-and-replace of asset references across target files.
//!
//! Rules are applied one after another, each one to the output of the previous
//! rule, and each application replaces every non-overlapping occurrence.
//! Patterns are plain byte strings: characters such as `.` in file names only
//! ever match themselves, and target files need not be UTF-8. Binary files
//! matched by a broad target glob pass through untouched unless they contain a
//! key.

use std::path::{Path, PathBuf};

use hashbust_common::match_files;
use hashbust_manifest::ManifestEntry;
use memchr::memmem;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::RewriteError;

/// Result of processing a single target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// The target file.
    pub file: PathBuf,
    /// Whether the rewritten content differs from the original.
    pub changed: bool,
    /// Total occurrences replaced across all rules.
    pub num_replacements: usize,
}

/// A target file whose content changed during the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    /// The target file.
    pub file: PathBuf,
    /// Total occurrences replaced across all rules.
    pub num_replacements: usize,
}

/// Applies ordered manifest entries to target files.
pub struct ReplacementEngine {
    rules: Vec<ManifestEntry>,
    dry_run: bool,
}

impl ReplacementEngine {
    /// Creates an engine applying `rules` in the given order.
    ///
    /// The caller is responsible for ordering, normally via
    /// [`hashbust_manifest::resolve_order`].
    pub fn new(rules: Vec<ManifestEntry>) -> Self {
        Self {
            rules,
            dry_run: false,
        }
    }

    /// When `true`, results are computed but no file is written.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Rewrites `content`, returning the new bytes and the replacement count.
    pub fn apply(&self, content: &[u8]) -> (Vec<u8>, usize) {
        let mut bytes = content.to_vec();
        let mut total = 0;
        for rule in &self.rules {
            if rule.original.is_empty() {
                continue;
            }
            if let Some((replaced, count)) =
                replace_all(&bytes, rule.original.as_bytes(), rule.hashed.as_bytes())
            {
                bytes = replaced;
                total += count;
            }
        }
        (bytes, total)
    }

    /// Rewrites one target file in place (unless dry).
    ///
    /// The file is only written when its content changed.
    pub fn rewrite_file(&self, path: &Path) -> Result<RewriteOutcome, RewriteError> {
        let content = std::fs::read(path).map_err(|e| RewriteError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let (rewritten, num_replacements) = self.apply(&content);
        let changed = rewritten != content;

        if changed && !self.dry_run {
            std::fs::write(path, rewritten).map_err(|e| RewriteError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
            info!(file = %path.display(), num_replacements, "rewrote target file");
        }

        Ok(RewriteOutcome {
            file: path.to_path_buf(),
            changed,
            num_replacements,
        })
    }

    /// Rewrites every file matched by `target_pattern`, in glob order.
    ///
    /// A pattern that matches nothing is not an error.
    pub fn run(&self, target_pattern: &str) -> Result<Vec<RewriteOutcome>, RewriteError> {
        let files = match_files(target_pattern)?;
        debug!(
            pattern = target_pattern,
            count = files.len(),
            rules = self.rules.len(),
            dry_run = self.dry_run,
            "matched target files"
        );
        files.iter().map(|f| self.rewrite_file(f)).collect()
    }
}

/// Replaces every non-overlapping occurrence of `needle`, scanning left to
/// right. Returns `None` when there is no occurrence.
fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Option<(Vec<u8>, usize)> {
    let finder = memmem::Finder::new(needle);
    let mut out = Vec::with_capacity(haystack.len());
    let mut last = 0;
    let mut count = 0;
    for start in finder.find_iter(haystack) {
        out.extend_from_slice(&haystack[last..start]);
        out.extend_from_slice(replacement);
        last = start + needle.len();
        count += 1;
    }
    if count == 0 {
        return None;
    }
    out.extend_from_slice(&haystack[last..]);
    Some((out, count))
}

/// Keeps only the outcomes whose file content changed.
pub fn changed_files(outcomes: &[RewriteOutcome]) -> Vec<ChangeRecord> {
    outcomes
        .iter()
        .filter(|o| o.changed)
        .map(|o| ChangeRecord {
            file: o.file.clone(),
            num_replacements: o.num_replacements,
        })
        .collect()
}
