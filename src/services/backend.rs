//! Backend REST client
//!
//! Issues authenticated JSON POST requests to the business backend and
//! normalizes every transport or HTTP failure into a [`BackendResult`].
//! Calls are single-shot: there are no retries.

use std::time::Duration;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn, error};
use crate::config::BackendConfig;
use crate::models::BackendResponse;
use crate::utils::errors::{RelayError, Result};

pub const CUSTOMERS_CREATE_ENDPOINT: &str = "/customers/create";
pub const CHAT_LOGS_ENDPOINT: &str = "/chat-logs";

pub const TIMEOUT_MESSAGE: &str = "Backend service timed out. Please try again.";

/// Credential scope selecting which API key authorizes a call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiScope {
    Customer,
    Billing,
    Chatlog,
}

/// Outcome of a backend call
#[derive(Debug, Clone, PartialEq)]
pub enum BackendResult {
    /// 2xx response with a JSON body
    Success(Value),
    /// Timeout, network failure, HTTP error status or malformed body
    Error(String),
}

impl BackendResult {
    /// Backend body in its documented `{status, message}` shape
    pub fn response(&self) -> Option<BackendResponse> {
        match self {
            BackendResult::Success(body) => Some(BackendResponse::from_body(body)),
            BackendResult::Error(_) => None,
        }
    }
}

/// Client for the backend REST API
#[derive(Clone, Debug)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    customer_api_key: String,
    billing_api_key: String,
    chatlog_api_key: String,
}

impl BackendClient {
    /// Create a new BackendClient using the configured timeout
    pub fn new(config: &BackendConfig) -> Result<Self> {
        Self::with_timeout(config, Duration::from_secs(config.timeout_seconds))
    }

    /// Create a new BackendClient with an explicit request timeout
    pub fn with_timeout(config: &BackendConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ViberRelay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RelayError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            customer_api_key: config.customer_api_key.clone(),
            billing_api_key: config.billing_api_key.clone(),
            chatlog_api_key: config.chatlog_api_key.clone(),
        })
    }

    /// API key for a credential scope
    pub fn api_key(&self, scope: ApiScope) -> &str {
        match scope {
            ApiScope::Customer => &self.customer_api_key,
            ApiScope::Billing => &self.billing_api_key,
            ApiScope::Chatlog => &self.chatlog_api_key,
        }
    }

    /// Absolute URL of an endpoint path
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// POST `payload` as JSON to `endpoint`, authorized for `scope`
    pub async fn call<P: Serialize + ?Sized>(&self, endpoint: &str, payload: &P, scope: ApiScope) -> BackendResult {
        let url = self.endpoint_url(endpoint);
        debug!(url = %url, scope = ?scope, "Calling backend");

        let response = match self.client
            .post(&url)
            .bearer_auth(self.api_key(scope))
            .json(payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                warn!(url = %url, "Backend call timed out");
                return BackendResult::Error(TIMEOUT_MESSAGE.to_string());
            }
            Err(e) => {
                error!(url = %url, error = %e, "Backend call failed");
                return BackendResult::Error(format!("Backend service error: {}", e));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => {
                warn!(url = %url, "Backend response body timed out");
                return BackendResult::Error(TIMEOUT_MESSAGE.to_string());
            }
            Err(e) => {
                error!(url = %url, error = %e, "Failed to read backend response");
                return BackendResult::Error(format!("Backend service error: {}", e));
            }
        };

        if status.as_u16() >= 400 {
            warn!(url = %url, status = status.as_u16(), body = %body, "Backend returned error status");
            return BackendResult::Error(format!("Backend service error: HTTP {}: {}", status, body));
        }

        debug!(url = %url, status = status.as_u16(), "Backend responded");

        match serde_json::from_str::<Value>(&body) {
            Ok(value) => BackendResult::Success(value),
            Err(e) => {
                error!(url = %url, error = %e, "Backend returned malformed JSON");
                BackendResult::Error(format!("Backend service returned an invalid response: {}", e))
            }
        }
    }
}
