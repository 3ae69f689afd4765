//! Mock Viber bot API server for testing

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const TEST_AUTH_TOKEN: &str = "445da6az1s345z78-dazcczb2542zv51a-e0vc5fva17480im9";

/// Mock Viber API server
pub struct ViberMockServer {
    pub server: MockServer,
}

impl ViberMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn api_url(&self) -> String {
        format!("{}/pa", self.server.uri())
    }

    async fn mock_method(&self, name: &str, status: i64, status_message: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/pa/{}", name)))
            .and(header("X-Viber-Auth-Token", TEST_AUTH_TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": status,
                "status_message": status_message,
            })))
            .mount(&self.server)
            .await;
    }

    /// `send_message` answering `ok`
    pub async fn mock_send_message(&self) {
        self.mock_method("send_message", 0, "ok").await;
    }

    /// `send_message` answering with a Viber error status
    pub async fn mock_send_message_failure(&self) {
        self.mock_method("send_message", 6, "receiverNotSubscribed").await;
    }

    pub async fn mock_set_webhook(&self) {
        self.mock_method("set_webhook", 0, "ok").await;
    }

    pub async fn mock_set_webhook_failure(&self) {
        self.mock_method("set_webhook", 1, "invalidUrl").await;
    }

    /// Bodies of the messages sent so far, oldest first
    pub async fn sent_messages(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path() == "/pa/send_message")
            .filter_map(|request| serde_json::from_slice(&request.body).ok())
            .collect()
    }
}
