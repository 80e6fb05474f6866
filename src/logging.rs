//! Logging System
//!
//! Structured logging through `tracing`. The binary writes events to stderr so
//! command output on stdout stays clean; the level comes from `LIBRARIAN_LOG`
//! using `EnvFilter` directives (e.g. `LIBRARIAN_LOG=librarian=debug`).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives
pub const LOG_ENV: &str = "LIBRARIAN_LOG";

const DEFAULT_FILTER: &str = "warn";

pub fn init_logging() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))
}
