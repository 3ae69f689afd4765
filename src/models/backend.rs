//! Backend REST payloads

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /customers/create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreateRequest {
    pub name: String,
    pub phone: String,
    pub region: String,
}

/// Body of `POST /chat-logs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLogRequest {
    pub viber_id: String,
    pub message: String,
    /// UTC, second precision, trailing `Z`
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ChatLogRequest {
    pub const USER_QUERY: &'static str = "user_query";

    /// Support question sent by `viber_id` at `at`
    pub fn user_query(viber_id: &str, message: &str, at: DateTime<Utc>) -> Self {
        Self {
            viber_id: viber_id.to_string(),
            message: message.to_string(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Secs, true),
            kind: Self::USER_QUERY.to_string(),
        }
    }
}

/// Response shape shared by the backend endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BackendResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl BackendResponse {
    /// Read `status` and `message` from any JSON body, ignoring fields that
    /// are missing or not strings
    pub fn from_body(body: &Value) -> Self {
        let text = |field: &str| body.get(field).and_then(Value::as_str).map(str::to_string);
        Self {
            status: text("status"),
            message: text("message"),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}
