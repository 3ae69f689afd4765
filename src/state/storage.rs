//! Conversation store implementation
//!
//! In-memory, process-lifetime map from Viber user id to conversation.
//! Each user has its own async mutex so a read-modify-write for one user
//! never interleaves with another message from the same user, while
//! different users proceed in parallel. Nothing is persisted or evicted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use tracing::debug;
use crate::models::UserConversation;

type Slot = Arc<AsyncMutex<UserConversation>>;

/// Exclusive access to one user's conversation; writes through on assignment
pub type ConversationGuard = OwnedMutexGuard<UserConversation>;

/// Keyed in-memory conversation storage
#[derive(Clone, Default)]
pub struct ConversationStore {
    slots: Arc<Mutex<HashMap<String, Slot>>>,
}

impl std::fmt::Debug for ConversationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationStore").field("users", &self.len()).finish()
    }
}

impl ConversationStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn existing_slot(&self, user_id: &str) -> Option<Slot> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(user_id)
            .cloned()
    }

    fn slot(&self, user_id: &str) -> Slot {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(user_id.to_string())
            .or_default()
            .clone()
    }

    /// Current conversation of `user_id`, or a fresh one. Never inserts.
    pub async fn get(&self, user_id: &str) -> UserConversation {
        match self.existing_slot(user_id) {
            Some(slot) => slot.lock().await.clone(),
            None => UserConversation::new(),
        }
    }

    /// Replace the conversation of `user_id`
    pub async fn put(&self, user_id: &str, conversation: UserConversation) {
        let slot = self.slot(user_id);
        *slot.lock().await = conversation;
        debug!(user_id = user_id, "Conversation stored");
    }

    /// Acquire the per-user lock for an atomic read-modify-write
    pub async fn lock(&self, user_id: &str) -> ConversationGuard {
        self.slot(user_id).lock_owned().await
    }

    /// Drop a user's conversation; returns whether one existed
    pub fn remove(&self, user_id: &str) -> bool {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(user_id)
            .is_some()
    }

    /// Number of users with a stored conversation
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
