//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};
use crate::utils::errors::Result;

/// Environment variable names used by existing deployments of the middleware.
/// They take precedence over the prefixed `RELAY_*` variables.
const LEGACY_ENV_OVERRIDES: &[(&str, &str)] = &[
    ("VIBER_AUTH_TOKEN", "viber.auth_token"),
    ("VIBER_WEBHOOK_URL", "viber.webhook_url"),
    ("BACKEND_API_BASE_URL", "backend.base_url"),
    ("CUSTOMER_API_KEY_MIDDLEWARE", "backend.customer_api_key"),
    ("BILLING_API_KEY_MIDDLEWARE", "backend.billing_api_key"),
    ("CHATLOG_API_KEY_MIDDLEWARE", "backend.chatlog_api_key"),
    ("PORT", "server.port"),
];

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub viber: ViberConfig,
    pub backend: BackendConfig,
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Viber bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViberConfig {
    pub auth_token: String,
    /// Public URL of this service, registered through `/set_webhook`
    pub webhook_url: Option<String>,
    pub bot_name: String,
    pub avatar: Option<String>,
    pub api_url: String,
}

/// Backend REST API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub customer_api_key: String,
    pub billing_api_key: String,
    pub chatlog_api_key: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
    pub json: bool,
}

impl Settings {
    /// Load settings from `.env`, configuration file and environment variables
    pub fn new() -> Result<Self> {
        dotenv::dotenv().ok();

        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("viber.auth_token", "")?
            .set_default("viber.bot_name", "Myanmar Link Bot")?
            .set_default("viber.api_url", "https://chatapi.viber.com/pa")?
            .set_default("backend.base_url", "http://localhost:5000/api/v1")?
            .set_default("backend.timeout_seconds", 10)?
            .set_default("backend.customer_api_key", "")?
            .set_default("backend.billing_api_key", "")?
            .set_default("backend.chatlog_api_key", "")?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("RELAY").prefix_separator("_").separator("__"));

        for (variable, key) in LEGACY_ENV_OVERRIDES {
            builder = builder.set_override_option(*key, std::env::var(variable).ok())?;
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }

    /// Socket address string the webhook server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            viber: ViberConfig {
                auth_token: String::new(),
                webhook_url: None,
                bot_name: "Myanmar Link Bot".to_string(),
                avatar: None,
                api_url: "https://chatapi.viber.com/pa".to_string(),
            },
            backend: BackendConfig {
                base_url: "http://localhost:5000/api/v1".to_string(),
                timeout_seconds: 10,
                customer_api_key: String::new(),
                billing_api_key: String::new(),
                chatlog_api_key: String::new(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
                json: false,
            },
        }
    }
}
