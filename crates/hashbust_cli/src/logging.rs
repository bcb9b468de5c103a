//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence. Otherwise `verbose` enables debug events from
/// the hashbust crates and everything else stays at `warn`.
pub fn init(verbose: bool) {
    let default_directives = if verbose { "warn,hashbust=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    // A subscriber may already be installed when embedded in a larger process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
