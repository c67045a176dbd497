//! Diagnostic logging setup
//!
//! Events go to stderr so they never interleave with the report on stdout.
//! The filter is read from `APPICONS_LOG` (e.g. `APPICONS_LOG=debug`) and
//! defaults to warnings only.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "APPICONS_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber; a second call is a no-op
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
