//! Test data helpers for building Viber callbacks

use serde_json::{json, Value};
use ViberRelay::models::{InboundEvent, ViberMessage, ViberUser};

pub const TEST_USER_ID: &str = "01234567890A=";

pub fn test_user(id: &str, name: Option<&str>) -> ViberUser {
    ViberUser {
        id: id.to_string(),
        name: name.map(str::to_string),
        avatar: None,
        language: Some("my".to_string()),
    }
}

/// Parsed text message from `user_id`
pub fn text_message(user_id: &str, text: &str) -> InboundEvent {
    InboundEvent::Message {
        sender: test_user(user_id, Some("Test User")),
        message: ViberMessage {
            kind: "text".to_string(),
            text: Some(text.to_string()),
        },
        message_token: Some(4912661846655238145),
        timestamp: Some(1457764197627),
    }
}

/// Raw `message` callback body as Viber posts it
pub fn text_message_json(user_id: &str, text: &str) -> Value {
    json!({
        "event": "message",
        "timestamp": 1457764197627u64,
        "message_token": 4912661846655238145u64,
        "sender": {
            "id": user_id,
            "name": "Test User",
            "avatar": "http://avatar.example.com",
            "country": "MM",
            "language": "my",
            "api_version": 1
        },
        "message": {
            "type": "text",
            "text": text,
            "tracking_data": "tracking data"
        }
    })
}

pub fn subscribed_json(user_id: &str, name: &str) -> Value {
    json!({
        "event": "subscribed",
        "timestamp": 1457764197627u64,
        "user": {"id": user_id, "name": name, "language": "my", "api_version": 1},
        "message_token": 4912661846655238145u64
    })
}

pub fn conversation_started_json(user_id: &str, name: &str) -> Value {
    json!({
        "event": "conversation_started",
        "timestamp": 1457764197627u64,
        "message_token": 4912661846655238145u64,
        "type": "open",
        "context": "context information",
        "user": {"id": user_id, "name": name, "language": "my", "api_version": 1},
        "subscribed": false
    })
}

pub fn delivered_json(user_id: &str) -> Value {
    json!({
        "event": "delivered",
        "timestamp": 1457764197627u64,
        "message_token": 4912661846655238145u64,
        "user_id": user_id
    })
}
