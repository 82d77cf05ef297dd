//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the interview orchestrator.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};
use crate::config::LoggingConfig;
use crate::utils::errors::{InterviewError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file appender when dropped, so the caller
/// must hold on to it for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let stdout_layer: Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync> = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            let file_appender = tracing_appender::rolling::daily(directory, "interview-orchestrator.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.level))
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| InterviewError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!(level = %config.level, json = config.json, "Logging initialized");
    Ok(guard)
}

/// Log a session cursor movement
pub fn log_session_progress(session_id: &str, operation: &str, from: u64, to: u64) {
    debug!(
        session_id = session_id,
        operation = operation,
        from = from,
        to = to,
        "Session progress recorded"
    );
}

/// Log a backend call that failed and was degraded to a default
pub fn log_backend_failure(operation: &str, session_id: &str, error: &InterviewError) {
    warn!(
        operation = operation,
        session_id = session_id,
        severity = %error.severity(),
        recoverable = error.is_recoverable(),
        error = %error,
        "Session store unavailable, degrading to default"
    );
}
