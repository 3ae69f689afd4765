//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the ViberRelay application.

use std::path::Path;
use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use crate::config::LoggingConfig;
use crate::models::ConversationState;
use crate::utils::errors::{ErrorSeverity, RelayError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| RelayError::Config(format!("Invalid log filter '{}': {}", config.level, e)))?;

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout).boxed()
    };

    let (file_layer, guard) = match config.file_path.as_deref() {
        Some(path) if !path.is_empty() => {
            let path = Path::new(path);
            let directory = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let file_name = path.file_name()
                .ok_or_else(|| RelayError::Config(format!("Log file path has no file name: {}", path.display())))?;

            let file_appender = tracing_appender::rolling::daily(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        _ => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| RelayError::Config(format!("Failed to install tracing subscriber: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a conversation state change
pub fn log_transition(user_id: &str, from: ConversationState, to: ConversationState) {
    if from == to {
        debug!(user_id = user_id, state = %from, "Conversation state unchanged");
    } else {
        info!(user_id = user_id, from = %from, to = %to, "Conversation state advanced");
    }
}

/// Log a backend call outcome
pub fn log_backend_outcome(endpoint: &str, success: bool, detail: Option<&str>) {
    if success {
        info!(endpoint = endpoint, "Backend call succeeded");
    } else {
        warn!(endpoint = endpoint, detail = detail, "Backend call failed");
    }
}

/// Log API errors with context, at the level their severity calls for
pub fn log_api_error(api: &str, err: &RelayError, context: Option<&str>) {
    let severity = err.severity();
    let recoverable = err.is_recoverable();

    match severity {
        ErrorSeverity::Warning => warn!(
            api = api,
            error = %err,
            context = context,
            recoverable = recoverable,
            "API error occurred"
        ),
        ErrorSeverity::Error | ErrorSeverity::Critical => error!(
            api = api,
            error = %err,
            context = context,
            severity = %severity,
            recoverable = recoverable,
            "API error occurred"
        ),
    }
}
