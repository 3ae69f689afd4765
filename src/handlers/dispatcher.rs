//! Event dispatcher
//!
//! Routes parsed Viber callbacks: text messages go through the conversation
//! engine, greeting events are answered directly, everything else is ignored.
//! This is the only place that writes to the [`ConversationStore`].
//!
//! The per-user lock is held for the whole message, backend call included,
//! so a second message from the same user waits for the first to finish
//! (bounded by the backend timeout). Other users are never blocked.

use tracing::{debug, info};
use crate::models::{InboundEvent, OutboundReply};
use crate::state::{replies, ConversationEngine, ConversationStore};

#[derive(Clone, Debug)]
pub struct EventDispatcher {
    store: ConversationStore,
    engine: ConversationEngine,
}

impl EventDispatcher {
    pub fn new(store: ConversationStore, engine: ConversationEngine) -> Self {
        Self { store, engine }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// Handle one callback and return the replies to deliver
    pub async fn handle_inbound_event(&self, event: InboundEvent) -> Vec<OutboundReply> {
        match event {
            InboundEvent::Message { sender, message, .. } => {
                let Some(text) = message.text else {
                    debug!(user_id = %sender.id, kind = %message.kind, "Ignoring non-text message");
                    return Vec::new();
                };

                info!(user_id = %sender.id, sender_name = ?sender.name, "Received message");
                let reply = self.handle_text(&sender.id, &text).await;
                vec![OutboundReply::new(sender.id, reply)]
            }
            InboundEvent::Subscribed { user } | InboundEvent::ConversationStarted { user, .. } => {
                info!(user_id = %user.id, "Greeting user");
                let text = replies::greeting(user.name.as_deref());
                vec![OutboundReply::new(user.id, text)]
            }
            InboundEvent::Unsubscribed { user_id } => {
                debug!(user_id = %user_id, "User unsubscribed");
                Vec::new()
            }
            InboundEvent::Other => {
                debug!("Ignoring callback");
                Vec::new()
            }
        }
    }

    async fn handle_text(&self, user_id: &str, text: &str) -> String {
        let mut conversation = self.store.lock(user_id).await;
        let step = self.engine.advance(user_id, &conversation, text).await;
        *conversation = step.conversation;
        step.reply
    }
}
