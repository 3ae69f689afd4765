//! Error handling for ViberRelay
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.
//!
//! Backend failures are not errors at this level: they are folded into
//! [`crate::services::backend::BackendResult`] and shown to the user.

use thiserror::Error;

/// Main error type for ViberRelay application
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Viber API error: {0}")]
    Viber(#[from] ViberError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid inbound event: {0}")]
    InvalidEvent(String),
}

/// Viber REST API specific errors
#[derive(Error, Debug)]
pub enum ViberError {
    #[error("Viber API returned status {status}: {message}")]
    Api { status: i64, message: String },

    #[error("Viber API timeout")]
    Timeout,

    #[error("Viber API request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid Viber response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for ViberRelay operations
pub type Result<T> = std::result::Result<T, RelayError>;

/// Result type alias for Viber transport operations
pub type ViberResult<T> = std::result::Result<T, ViberError>;

impl RelayError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            RelayError::Config(_) => false,
            RelayError::ConfigLoad(_) => false,
            RelayError::Viber(_) => true,
            RelayError::Http(_) => true,
            RelayError::UrlParse(_) => false,
            RelayError::InvalidEvent(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RelayError::Config(_) => ErrorSeverity::Critical,
            RelayError::ConfigLoad(_) => ErrorSeverity::Critical,
            RelayError::InvalidEvent(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
