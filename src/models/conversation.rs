//! Conversation model

use std::fmt;
use serde::{Deserialize, Serialize};

/// Step of the guided dialog a user is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    Initial,
    AwaitingName,
    AwaitingPhone,
    AwaitingRegion,
    AwaitingSupportMessage,
}

impl ConversationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationState::Initial => "initial",
            ConversationState::AwaitingName => "awaiting_name",
            ConversationState::AwaitingPhone => "awaiting_phone",
            ConversationState::AwaitingRegion => "awaiting_region",
            ConversationState::AwaitingSupportMessage => "awaiting_support_message",
        }
    }
}

impl fmt::Display for ConversationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registration fields accumulated across steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedData {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub region: Option<String>,
}

impl CollectedData {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.region.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Conversation of a single end user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConversation {
    pub state: ConversationState,
    pub data: CollectedData,
}

impl UserConversation {
    /// Fresh conversation at the start of the dialog
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `state` keeping the collected data
    pub fn advance(mut self, state: ConversationState) -> Self {
        self.state = state;
        self
    }

    /// Back to the initial state with nothing collected
    pub fn reset(&mut self) {
        self.state = ConversationState::Initial;
        self.data.clear();
    }

    pub fn is_initial(&self) -> bool {
        self.state == ConversationState::Initial && self.data.is_empty()
    }
}
