//! State management module
//!
//! This module handles conversation state: the per-user store, the
//! transition rules and the reply templates.

pub mod machine;
pub mod replies;
pub mod storage;

// Re-export commonly used state components
pub use machine::{BackendCall, ConversationEngine, Outcome, Step, Transition};
pub use storage::{ConversationGuard, ConversationStore};
