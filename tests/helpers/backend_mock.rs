//! Mock backend REST server for testing
//!
//! Simulates the customer and chat-log endpoints of the backend with
//! wiremock, with configurable status, body and latency.

use serde_json::{json, Value};
use std::time::Duration;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const API_PREFIX: &str = "/api/v1";

/// Mock backend server
pub struct BackendMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub status: u16,
    pub body: Option<Value>,
    pub raw_body: Option<String>,
    pub delay_ms: Option<u64>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            status: 200,
            body: Some(json!({"status": "success"})),
            raw_body: None,
            delay_ms: None,
        }
    }
}

impl MockResponseConfig {
    /// 200 with `{status: "success", message}`
    pub fn success(message: &str) -> Self {
        Self {
            body: Some(json!({"status": "success", "message": message})),
            ..Self::default()
        }
    }

    /// Plain-text error response
    pub fn http_error(status: u16, text: &str) -> Self {
        Self {
            status,
            body: None,
            raw_body: Some(text.to_string()),
            delay_ms: None,
        }
    }

    pub fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    fn template(&self) -> ResponseTemplate {
        let mut response = ResponseTemplate::new(self.status);
        if let Some(body) = &self.body {
            response = response.set_body_json(body.clone());
        } else if let Some(raw) = &self.raw_body {
            response = response.set_body_string(raw.clone());
        }
        if let Some(delay) = self.delay_ms {
            response = response.set_delay(Duration::from_millis(delay));
        }
        response
    }
}

impl BackendMockServer {
    /// Create a new mock backend server
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL including the API prefix
    pub fn base_url(&self) -> String {
        format!("{}{}", self.server.uri(), API_PREFIX)
    }

    /// Mock `POST /customers/create` guarded by the customer key
    pub async fn mock_create_customer(&self, config: MockResponseConfig) {
        self.mock_endpoint("/customers/create", "customer-key", config).await;
    }

    /// Mock `POST /chat-logs` guarded by the chat-log key
    pub async fn mock_chat_logs(&self, config: MockResponseConfig) {
        self.mock_endpoint("/chat-logs", "chatlog-key", config).await;
    }

    pub async fn mock_endpoint(&self, endpoint: &str, api_key: &str, config: MockResponseConfig) {
        Mock::given(method("POST"))
            .and(path(format!("{}{}", API_PREFIX, endpoint)))
            .and(header("Authorization", format!("Bearer {}", api_key).as_str()))
            .and(header("Content-Type", "application/json"))
            .respond_with(config.template())
            .mount(&self.server)
            .await;
    }

    /// Mock both endpoints with a plain success
    pub async fn setup_default_mocks(&self) {
        self.mock_create_customer(MockResponseConfig::default()).await;
        self.mock_chat_logs(MockResponseConfig::default()).await;
    }

    /// JSON bodies received on `endpoint`, oldest first
    pub async fn received_json(&self, endpoint: &str) -> Vec<Value> {
        let full_path = format!("{}{}", API_PREFIX, endpoint);
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == full_path)
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }

    pub async fn reset(&self) {
        self.server.reset().await;
    }
}
