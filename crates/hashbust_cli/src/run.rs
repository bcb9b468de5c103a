//! The cache-busting pipeline behind the `hashbust` command.
//!
//! 1. Load and validate the configuration
//! 2. Hash, map and rename every source asset
//! 3. Order the manifest by descending key
//! 4. Rewrite references in every target file
//! 5. Report changed files

use std::path::{Path, PathBuf};

use hashbust_config::{load_config, load_config_from_path, BustConfig, ConfigError};
use hashbust_manifest::{resolve_order, ManifestBuilder};
use hashbust_rewrite::{changed_files, ReplacementEngine};
use tracing::debug;

use crate::report::{Reporter, RunReport};

/// Options for a single run, derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Compute and report changes without touching the filesystem.
    pub dry_run: bool,
    /// Configuration file to use instead of `<work_dir>/.cache-buster.json`.
    pub config: Option<PathBuf>,
}

/// Runs the pipeline in `work_dir`, reporting through `reporter`.
///
/// Returns exit code 0 on success. Every failure is fatal and returned as an
/// error; renames that happened before it are left in place.
pub fn run(
    options: &RunOptions,
    work_dir: &Path,
    reporter: &mut dyn Reporter,
) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load(options, work_dir).inspect_err(|e| {
        if let ConfigError::NotFound(path) = e {
            debug!(path = %path.display(), "configuration file not found");
        }
    })?;
    debug!(?config, "loaded configuration");

    if options.dry_run {
        reporter.dry_run_banner()?;
    }

    let builder = ManifestBuilder::new(&config.public_path, config.url.as_deref(), config.hash_length)?
        .dry_run(options.dry_run);
    let built = builder.build(&config.source)?;
    for rename in &built.renames {
        debug!(from = %rename.from.display(), to = %rename.to.display(), "asset rename");
    }

    let rules = resolve_order(&built.manifest);
    let engine = ReplacementEngine::new(rules).dry_run(options.dry_run);
    let outcomes = engine.run(&config.target)?;

    let report = RunReport::new(
        options.dry_run,
        built.manifest,
        changed_files(&outcomes),
        work_dir,
    );
    reporter.report(&report)?;
    Ok(0)
}

fn load(options: &RunOptions, work_dir: &Path) -> Result<BustConfig, ConfigError> {
    match &options.config {
        Some(path) => load_config_from_path(&work_dir.join(path), work_dir),
        None => load_config(work_dir),
    }
}
