//! Error handling for the interview orchestrator
//!
//! This module defines the main error type used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the interview orchestrator
#[derive(Error, Debug)]
pub enum InterviewError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid cursor value stored under {key}: {value}")]
    InvalidCursor { key: String, value: String },

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Result type alias for interview orchestrator operations
pub type Result<T> = std::result::Result<T, InterviewError>;

impl InterviewError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            InterviewError::Redis(_) => true,
            InterviewError::Serialization(_) => false,
            InterviewError::ConfigLoad(_) => false,
            InterviewError::Config(_) => false,
            InterviewError::Io(_) => true,
            InterviewError::InvalidCursor { .. } => false,
            InterviewError::ServiceUnavailable(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            InterviewError::ConfigLoad(_) => ErrorSeverity::Critical,
            InterviewError::Config(_) => ErrorSeverity::Critical,
            InterviewError::InvalidCursor { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
