//! User-facing output of a run.
//!
//! All console output goes through the [`Reporter`] trait so that quiet mode
//! is a property of the injected reporter rather than of the process.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use hashbust_manifest::Manifest;
use hashbust_rewrite::ChangeRecord;
use serde::Serialize;

use crate::ReportFormat;

/// Outcome of one run, with change paths relative to the working directory.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Whether the run was dry.
    pub dry_run: bool,
    /// The manifest that was applied.
    pub manifest: Manifest,
    /// Target files whose content changed.
    pub changes: Vec<ChangeRecord>,
}

impl RunReport {
    /// Builds a report, rewriting change paths relative to `work_dir`.
    pub fn new(dry_run: bool, manifest: Manifest, changes: Vec<ChangeRecord>, work_dir: &Path) -> Self {
        let changes = changes
            .into_iter()
            .map(|c| ChangeRecord {
                file: relative_to(&c.file, work_dir),
                num_replacements: c.num_replacements,
            })
            .collect();
        Self {
            dry_run,
            manifest,
            changes,
        }
    }
}

/// Sink for everything a run prints.
///
/// Write failures are returned rather than swallowed, so a closed stdout
/// fails the run instead of going unnoticed.
pub trait Reporter {
    /// Announces that the run is dry.
    fn dry_run_banner(&mut self) -> io::Result<()>;

    /// Prints the final report.
    fn report(&mut self, report: &RunReport) -> io::Result<()>;

    /// Prints a fatal error. Never suppressed.
    fn error(&mut self, message: &str) -> io::Result<()>;
}

/// Reporter writing to a pair of streams, normally stdout and stderr.
pub struct ConsoleReporter<O: Write, E: Write> {
    out: O,
    err: E,
    format: ReportFormat,
    quiet: bool,
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    /// Creates a reporter rendering in `format`.
    pub fn new(out: O, err: E, format: ReportFormat) -> Self {
        Self {
            out,
            err,
            format,
            quiet: false,
        }
    }

    /// Suppresses everything except errors.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Consumes the reporter, returning its streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Reporter for ConsoleReporter<O, E> {
    fn dry_run_banner(&mut self) -> io::Result<()> {
        if self.quiet || self.format == ReportFormat::Json {
            return Ok(());
        }
        writeln!(self.out, "{}", "Dry run…".yellow())
    }

    fn report(&mut self, report: &RunReport) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        match self.format {
            ReportFormat::Text => {
                for change in &report.changes {
                    writeln!(self.out, "{}", change_line(report.dry_run, change))?;
                }
            }
            ReportFormat::Json => {
                let json = serde_json::to_string_pretty(report)?;
                writeln!(self.out, "{json}")?;
            }
        }
        self.out.flush()
    }

    fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.err, "{}", format!("[ERROR] {message}").red())
    }
}

/// Formats one change line, e.g. `Replaced 2 occurrences in views/index.html`.
pub fn change_line(dry_run: bool, change: &ChangeRecord) -> String {
    let verb = if dry_run { "Would replace" } else { "Replaced" };
    let noun = if change.num_replacements == 1 {
        "occurrence"
    } else {
        "occurrences"
    };
    format!(
        "{} {} {} {} {}",
        verb.green(),
        change.num_replacements.to_string().green().bold(),
        noun.green().bold(),
        "in".green(),
        change.file.display().to_string().green().bold()
    )
}

fn relative_to(path: &Path, work_dir: &Path) -> PathBuf {
    path.strip_prefix(work_dir)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
