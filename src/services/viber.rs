//! Viber REST API client
//!
//! Thin outbound transport: delivers text replies and registers the webhook.
//! Every call carries the bot auth token in `X-Viber-Auth-Token`.

use std::time::Duration;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, error};
use crate::config::ViberConfig;
use crate::models::OutboundReply;
use crate::utils::errors::{RelayError, Result, ViberError, ViberResult};

const AUTH_HEADER: &str = "X-Viber-Auth-Token";
const MIN_API_VERSION: u32 = 1;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct Sender<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    receiver: &'a str,
    min_api_version: u32,
    sender: Sender<'a>,
    #[serde(rename = "type")]
    kind: &'static str,
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct SetWebhookRequest<'a> {
    url: &'a str,
    send_name: bool,
    send_photo: bool,
}

/// Status envelope returned by every Viber endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ViberStatus {
    pub status: i64,
    #[serde(default)]
    pub status_message: String,
}

/// Viber bot API client
#[derive(Clone, Debug)]
pub struct ViberClient {
    client: Client,
    api_url: String,
    auth_token: String,
    bot_name: String,
    avatar: Option<String>,
}

impl ViberClient {
    /// Create a new ViberClient instance
    pub fn new(config: &ViberConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("ViberRelay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RelayError::Http)?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
            bot_name: config.bot_name.clone(),
            avatar: config.avatar.clone(),
        })
    }

    /// Send a text message to a subscribed user
    pub async fn send_text(&self, receiver: &str, text: &str) -> ViberResult<ViberStatus> {
        let request = SendMessageRequest {
            receiver,
            min_api_version: MIN_API_VERSION,
            sender: Sender {
                name: &self.bot_name,
                avatar: self.avatar.as_deref(),
            },
            kind: "text",
            text,
        };

        debug!(receiver = receiver, "Sending Viber text message");
        self.post("send_message", &request).await
    }

    /// Deliver a reply produced by the dispatcher
    pub async fn deliver(&self, reply: &OutboundReply) -> ViberResult<ViberStatus> {
        self.send_text(&reply.receiver, &reply.text).await
    }

    /// Register `url` as the bot's webhook
    pub async fn set_webhook(&self, url: &str) -> ViberResult<ViberStatus> {
        let request = SetWebhookRequest {
            url,
            send_name: true,
            send_photo: false,
        };

        info!(url = url, "Registering Viber webhook");
        self.post("set_webhook", &request).await
    }

    async fn post<T: Serialize>(&self, method: &str, body: &T) -> ViberResult<ViberStatus> {
        let url = format!("{}/{}", self.api_url, method);

        let response = self.client
            .post(&url)
            .header(AUTH_HEADER, &self.auth_token)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ViberError::Timeout
                } else {
                    ViberError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!(method = method, status = status.as_u16(), "Viber API HTTP failure");
            return Err(ViberError::RequestFailed(format!("HTTP {}: {}", status, error_text)));
        }

        let envelope: ViberStatus = response.json().await
            .map_err(|e| ViberError::InvalidResponse(e.to_string()))?;

        if envelope.status != 0 {
            return Err(ViberError::Api {
                status: envelope.status,
                message: envelope.status_message,
            });
        }

        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_wire_format() {
        let request = SendMessageRequest {
            receiver: "u1",
            min_api_version: MIN_API_VERSION,
            sender: Sender { name: "Myanmar Link Bot", avatar: None },
            kind: "text",
            text: "hi",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["receiver"], "u1");
        assert_eq!(json["type"], "text");
        assert_eq!(json["sender"]["name"], "Myanmar Link Bot");
        assert!(json["sender"].get("avatar").is_none());
    }

    #[test]
    fn test_status_envelope() {
        let status: ViberStatus = serde_json::from_str(r#"{"status": 0, "status_message": "ok"}"#).unwrap();
        assert_eq!(status.status, 0);
        assert_eq!(status.status_message, "ok");
    }
}
