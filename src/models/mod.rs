//! Data models module
//!
//! This module contains the data structures exchanged with Viber and the
//! backend, and the per-user conversation record.

pub mod backend;
pub mod conversation;
pub mod event;

pub use backend::{BackendResponse, ChatLogRequest, CustomerCreateRequest};
pub use conversation::{CollectedData, ConversationState, UserConversation};
pub use event::{InboundEvent, OutboundReply, ViberMessage, ViberUser};
