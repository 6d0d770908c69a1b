//! ui::logging
//!
//! Diagnostic logging via `tracing`, written to stderr.
//!
//! The filter comes from, in order: `--debug` (forces `debug`), the
//! `VERSTAMP_LOG` environment variable (EnvFilter syntax), then `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "VERSTAMP_LOG";

/// Build the filter for the given flags.
pub fn filter(debug: bool) -> EnvFilter {
    if debug {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(debug: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(debug))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
