//! Logging initialization
//!
//! Diagnostics go to stderr so stdout carries only the download report.

use tracing_subscriber::EnvFilter;

use crate::config;

/// Initialize the global tracing subscriber.
///
/// The filter is taken from `HF_FETCH_LOG_LEVEL` (e.g. `debug`,
/// `hf_fetch=trace`) and defaults to `warn`.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(config::LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
