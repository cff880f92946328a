//! Tracing/logging initialization.
//!
//! Logs always go to stderr: stdout belongs to the interactive console.

use tracing_subscriber::EnvFilter;

use crate::{LogConfig, LogFormat};

/// Filter used when neither the command line nor the environment set one.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter, falling back to [`DEFAULT_FILTER`] on a bad directive.
pub fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &LogConfig) {
    let filter = env_filter(&config.filter);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.compact().try_init(),
    };
}
