//! hashbust — content-hash cache busting for static assets.
//!
//! Renames built assets so their file names carry a digest of their content,
//! then rewrites every reference to them in the configured target files.
//! Settings come from `.cache-buster.json` in the working directory.

#![warn(missing_docs)]

mod logging;
mod report;
mod run;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use crate::report::{ConsoleReporter, Reporter};
use crate::run::RunOptions;

/// hashbust — fingerprint static assets and rewrite their references.
#[derive(Parser, Debug)]
#[command(name = "hashbust", version, about = "Content-hash cache busting for static assets")]
pub struct Cli {
    /// Run without renaming files or making replacements.
    #[arg(short, long)]
    pub dry: bool,

    /// Suppress success output. Ignored together with `--dry`.
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose (debug-level) logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Report format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Path to a configuration file other than `.cache-buster.json`.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable lines, one per changed file.
    Text,
    /// Machine-readable JSON with the manifest and all changes.
    Json,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let color = match cli.color {
        ColorChoice::Auto => std::io::stdout().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };
    colored::control::set_override(color);

    let mut reporter = ConsoleReporter::new(std::io::stdout(), std::io::stderr(), cli.format)
        .quiet(cli.quiet && !cli.dry);
    let options = RunOptions {
        dry_run: cli.dry,
        config: cli.config,
    };

    let result: Result<i32, Box<dyn std::error::Error>> = std::env::current_dir()
        .map_err(Into::into)
        .and_then(|work_dir| run::run(&options, &work_dir, &mut reporter));

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            // stderr is the last channel left; nothing to do if it is gone too.
            let _ = reporter.error(&e.to_string());
            process::exit(1);
        }
    }
}
