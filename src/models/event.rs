//! Inbound Viber callback events

use serde::{Deserialize, Serialize};
use crate::utils::errors::{RelayError, Result};

/// Viber user as it appears in callbacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViberUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Message payload of a `message` callback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViberMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// Callback delivered by Viber to the webhook
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InboundEvent {
    Message {
        sender: ViberUser,
        message: ViberMessage,
        #[serde(default)]
        message_token: Option<u64>,
        #[serde(default)]
        timestamp: Option<u64>,
    },
    Subscribed {
        user: ViberUser,
    },
    ConversationStarted {
        user: ViberUser,
        #[serde(default)]
        subscribed: Option<bool>,
    },
    Unsubscribed {
        user_id: String,
    },
    /// `delivered`, `seen`, `failed`, `webhook` and anything newer
    #[serde(other)]
    Other,
}

impl InboundEvent {
    /// Decode a raw webhook body
    pub fn parse(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| RelayError::InvalidEvent(e.to_string()))
    }

    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            InboundEvent::Message { .. } => "message",
            InboundEvent::Subscribed { .. } => "subscribed",
            InboundEvent::ConversationStarted { .. } => "conversation_started",
            InboundEvent::Unsubscribed { .. } => "unsubscribed",
            InboundEvent::Other => "other",
        }
    }
}

/// Reply the transport must deliver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundReply {
    pub receiver: String,
    pub text: String,
}

impl OutboundReply {
    pub fn new(receiver: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            receiver: receiver.into(),
            text: text.into(),
        }
    }
}
