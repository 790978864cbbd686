//! Logging configuration and initialization
//!
//! This module sets up the tracing subscriber for structured logging.
//! Logs go to stderr so that command output on stdout stays machine-readable.

use crate::core::constants::DEFAULT_LOG_LEVEL;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Normalize a configured level into a tracing filter directive
///
/// Only the first word is considered. "warning" maps to "warn" and
/// "critical" to "error"; anything unrecognized falls back to "info".
pub fn normalize_level(log_level: &str) -> &'static str {
    let level = log_level
        .split_whitespace()
        .next()
        .unwrap_or(DEFAULT_LOG_LEVEL)
        .to_lowercase();

    match level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" | "warning" => "warn",
        "error" | "critical" => "error",
        _ => DEFAULT_LOG_LEVEL,
    }
}

/// Initialize the logging system with the specified level
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_logging(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(normalize_level(log_level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
