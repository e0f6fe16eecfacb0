use crate::constants::{DEFAULT_LOG_FILTER, LOG_DIR, LOG_FILE_PREFIX};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sets up tracing for an import run.
///
/// Events go to two places: a JSON file under `logs/` rotated daily, which keeps
/// the per-year fetch outcomes for later inspection, and a human-readable
/// stream on stderr. Stdout is left to the operator lines printed by the
/// pipeline ("Downloading year ...", "Saved: ...").
///
/// The returned guard flushes the file writer when dropped; hold it for the
/// whole run.
pub fn init_logging() -> WorkerGuard {
    if let Err(e) = fs::create_dir_all(LOG_DIR) {
        eprintln!("Could not create log directory '{}': {}", LOG_DIR, e);
    }

    let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE_PREFIX);
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    // Structured records carry the span fields (year, url, status) as JSON keys
    let file_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_writer(non_blocking_writer);

    let console_layer = fmt::layer()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
