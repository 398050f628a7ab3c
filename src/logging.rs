//! Logging configuration and initialization
//!
//! The library itself only emits `tracing` events. Binaries and test suites
//! that want to see them can install a subscriber here.

use tracing::debug;

/// Get the filter directive for a verbosity level
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install a global fmt subscriber for the given verbosity.
///
/// Returns `false` when a global subscriber is already installed, so calling
/// this from several tests is harmless.
pub fn init_logging(verbose: u8) -> bool {
    let detailed = verbose >= 3;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(log_level(verbose))
        .with_target(verbose >= 2)
        .with_thread_ids(detailed)
        .with_line_number(detailed);

    let installed = subscriber.try_init().is_ok();
    if installed {
        debug!(verbose, "tidbits logging initialized");
    }
    installed
}
