//! Manifest construction over all matched source assets.
//!
//! Each source file is hashed, mapped to its cache-busted name, recorded in the
//! manifest and (unless running dry) renamed on disk. Files are processed
//! strictly one after another in glob order, and every rename finishes before
//! the builder returns, so the rewrite pass never overlaps with it.

use std::path::{Path, PathBuf};

use hashbust_common::{match_files, HashLength};
use tracing::{debug, warn};

use crate::error::ManifestError;
use crate::hasher::SourceHasher;
use crate::manifest::Manifest;
use crate::mapper::PathMapper;

/// A rename performed (or, in a dry run, planned) for one source asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    /// The asset's original location.
    pub from: PathBuf,
    /// The hashed location below the public root.
    pub to: PathBuf,
}

/// Everything produced by a manifest build.
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    /// The original-to-hashed reference mapping.
    pub manifest: Manifest,
    /// Renames in the order they were applied.
    pub renames: Vec<RenamePlan>,
}

/// Hashes and renames source assets while collecting the manifest.
pub struct ManifestBuilder {
    mapper: PathMapper,
    hash_length: HashLength,
    dry_run: bool,
}

impl ManifestBuilder {
    /// Creates a builder for assets below `public_root`.
    ///
    /// A `url` switches the manifest values to absolute URLs.
    pub fn new(
        public_root: &Path,
        url: Option<&str>,
        hash_length: HashLength,
    ) -> Result<Self, ManifestError> {
        let root = public_root
            .to_str()
            .ok_or_else(|| ManifestError::NonUtf8Path(public_root.to_path_buf()))?;
        Ok(Self {
            mapper: PathMapper::new(root, url),
            hash_length,
            dry_run: false,
        })
    }

    /// When `true`, renames are planned and reported but not performed.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Builds the manifest for every file matched by `source_pattern`.
    ///
    /// A pattern that matches nothing yields an empty manifest.
    pub fn build(&self, source_pattern: &str) -> Result<BuildOutput, ManifestError> {
        let files = match_files(source_pattern)?;
        debug!(pattern = source_pattern, count = files.len(), "matched source files");
        self.build_from_files(&files)
    }

    /// Builds the manifest for an explicit list of source files, in order.
    ///
    /// Stops at the first failure; files renamed before it stay renamed.
    pub fn build_from_files(&self, files: &[PathBuf]) -> Result<BuildOutput, ManifestError> {
        let mut output = BuildOutput::default();

        for file in files {
            let path = file
                .to_str()
                .ok_or_else(|| ManifestError::NonUtf8Path(file.clone()))?;

            let digest = SourceHasher::hash_file(file, self.hash_length)?;
            let mapped = self.mapper.map(path, &digest);
            debug!(file = path, digest = %digest, key = %mapped.key, "hashed source file");

            if let Some(previous) = output.manifest.insert(mapped.key.clone(), mapped.value) {
                warn!(
                    key = %mapped.key,
                    replaced = %previous,
                    "duplicate manifest key, keeping the last file"
                );
            }

            let to = self.mapper.destination(&mapped.hashed_relative);
            if !self.dry_run {
                std::fs::rename(file, &to).map_err(|e| ManifestError::Rename {
                    from: file.clone(),
                    to: to.clone(),
                    source: e,
                })?;
                debug!(from = path, to = %to.display(), "renamed source file");
            }
            output.renames.push(RenamePlan {
                from: file.clone(),
                to,
            });
        }

        Ok(output)
    }
}
