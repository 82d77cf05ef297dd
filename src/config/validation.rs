//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{InterviewError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_redis_config(&settings.redis)?;
    validate_interview_config(&settings.interview)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(InterviewError::Config(
            "Server host is required".to_string()
        ));
    }

    if config.port == 0 {
        return Err(InterviewError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    if !config.api_prefix.starts_with('/') || config.api_prefix.ends_with('/') {
        return Err(InterviewError::Config(
            format!("API prefix must start with '/' and have no trailing '/': {}", config.api_prefix)
        ));
    }

    Ok(())
}

/// Validate Redis configuration
fn validate_redis_config(config: &super::RedisConfig) -> Result<()> {
    if config.backend == super::StorageBackend::Memory {
        return Ok(());
    }

    if config.host.is_empty() {
        return Err(InterviewError::Config(
            "Redis host is required".to_string()
        ));
    }

    if config.port == 0 {
        return Err(InterviewError::Config(
            "Redis port must be greater than 0".to_string()
        ));
    }

    if config.username.is_some() && config.password.as_deref().unwrap_or_default().is_empty() {
        return Err(InterviewError::Config(
            "Redis username requires a password".to_string()
        ));
    }

    Ok(())
}

/// Validate interview configuration
fn validate_interview_config(config: &super::InterviewConfig) -> Result<()> {
    if config.key_namespace.is_empty() {
        return Err(InterviewError::Config(
            "Interview key namespace is required".to_string()
        ));
    }

    if config.session_ttl_seconds == 0 {
        return Err(InterviewError::Config(
            "Session TTL must be greater than 0".to_string()
        ));
    }

    if let Some(position) = config.questions.iter().position(|q| q.question.trim().is_empty()) {
        return Err(InterviewError::Config(
            format!("Question {} has an empty prompt", position)
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(InterviewError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(InterviewError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
