use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Diagnostics go to stderr so they never mix with report output. `RUST_LOG`
/// takes precedence; otherwise only warnings are shown, or everything down to
/// `debug` with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "lockstep=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second call (e.g. from tests) leaves the first subscriber in place.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
