//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;
use crate::utils::errors::{RelayError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_viber_config(&settings.viber)?;
    validate_backend_config(&settings.backend)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(RelayError::Config("Server host is required".to_string()));
    }

    if config.port == 0 {
        return Err(RelayError::Config("Server port must be greater than 0".to_string()));
    }

    Ok(())
}

/// Validate Viber configuration
fn validate_viber_config(config: &super::ViberConfig) -> Result<()> {
    if config.auth_token.is_empty() {
        return Err(RelayError::Config("Viber auth token is required".to_string()));
    }

    if config.bot_name.is_empty() {
        return Err(RelayError::Config("Viber bot name is required".to_string()));
    }

    parse_http_url(&config.api_url, "Viber API URL")?;

    // An empty webhook URL counts as unset; /set_webhook reports it at request time.
    if let Some(webhook_url) = config.webhook_url.as_deref().filter(|url| !url.is_empty()) {
        parse_http_url(webhook_url, "Viber webhook URL")?;
    }

    Ok(())
}

/// Validate backend configuration
fn validate_backend_config(config: &super::BackendConfig) -> Result<()> {
    parse_http_url(&config.base_url, "Backend base URL")?;

    if config.timeout_seconds == 0 {
        return Err(RelayError::Config(
            "Backend timeout must be greater than 0".to_string()
        ));
    }

    let keys = [
        ("customer", &config.customer_api_key),
        ("billing", &config.billing_api_key),
        ("chatlog", &config.chatlog_api_key),
    ];
    for (scope, key) in keys {
        if key.is_empty() {
            return Err(RelayError::Config(
                format!("Backend {} API key is required", scope)
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(RelayError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(RelayError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

fn parse_http_url(raw: &str, what: &str) -> Result<Url> {
    if raw.is_empty() {
        return Err(RelayError::Config(format!("{} is required", what)));
    }

    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RelayError::Config(format!("{} must use http or https, got {}", what, other))),
    }
}
