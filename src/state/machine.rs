//! Conversation state machine
//!
//! [`ConversationEngine::transition`] is a pure function of the current
//! conversation, the sender and the incoming text: it validates the input,
//! updates the collected data, picks the next state and says either what to
//! reply or which backend call to make. [`ConversationEngine::advance`]
//! performs that call and turns its result into the reply text.
//!
//! Flows that reach the backend always finish back in the initial state with
//! the collected data cleared, whatever the backend answered.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use crate::models::{
    ChatLogRequest, ConversationState, CustomerCreateRequest, UserConversation,
};
use crate::services::backend::{
    ApiScope, BackendClient, BackendResult, CHAT_LOGS_ENDPOINT, CUSTOMERS_CREATE_ENDPOINT,
};
use crate::utils::errors::{RelayError, Result};
use crate::utils::logging;
use super::replies;

/// Myanmar mobile number: `09` followed by 7 to 9 digits
pub const PHONE_PATTERN: &str = r"^09[0-9]{7,9}$";

/// Backend request decided by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    CreateCustomer(CustomerCreateRequest),
    LogChat(ChatLogRequest),
}

impl BackendCall {
    pub fn endpoint(&self) -> &'static str {
        match self {
            BackendCall::CreateCustomer(_) => CUSTOMERS_CREATE_ENDPOINT,
            BackendCall::LogChat(_) => CHAT_LOGS_ENDPOINT,
        }
    }

    pub fn scope(&self) -> ApiScope {
        match self {
            BackendCall::CreateCustomer(_) => ApiScope::Customer,
            BackendCall::LogChat(_) => ApiScope::Chatlog,
        }
    }

    fn replies(&self) -> (&'static str, &'static str) {
        match self {
            BackendCall::CreateCustomer(_) => (replies::REGISTRATION_SUCCEEDED, replies::REGISTRATION_FAILED),
            BackendCall::LogChat(_) => (replies::SUPPORT_RECEIVED, replies::SUPPORT_FAILED),
        }
    }
}

/// What a transition asks the engine to do next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    Submit(BackendCall),
}

/// Result of applying one message to a conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub conversation: UserConversation,
    pub outcome: Outcome,
}

impl Transition {
    fn reply(conversation: UserConversation, text: &str) -> Self {
        Self {
            conversation,
            outcome: Outcome::Reply(text.to_string()),
        }
    }

    fn submit(mut conversation: UserConversation, call: BackendCall) -> Self {
        conversation.reset();
        Self {
            conversation,
            outcome: Outcome::Submit(call),
        }
    }
}

/// Conversation after a message, with the text to send back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub conversation: UserConversation,
    pub reply: String,
}

/// Drives conversations and talks to the backend on their behalf
#[derive(Clone, Debug)]
pub struct ConversationEngine {
    backend: BackendClient,
    phone_pattern: Regex,
}

impl ConversationEngine {
    pub fn new(backend: BackendClient) -> Result<Self> {
        let phone_pattern = Regex::new(PHONE_PATTERN)
            .map_err(|e| RelayError::Config(format!("Invalid phone pattern: {}", e)))?;

        Ok(Self { backend, phone_pattern })
    }

    pub fn is_valid_phone(&self, input: &str) -> bool {
        self.phone_pattern.is_match(input)
    }

    /// Decide the next conversation and action for `input`
    pub fn transition(
        &self,
        conversation: &UserConversation,
        sender_id: &str,
        input: &str,
        now: DateTime<Utc>,
    ) -> Transition {
        let current = conversation.clone();

        match current.state {
            ConversationState::Initial => initial_menu(current, input),

            ConversationState::AwaitingName => {
                let mut next = current.advance(ConversationState::AwaitingPhone);
                next.data.name = Some(input.to_string());
                Transition::reply(next, replies::ASK_PHONE)
            }

            ConversationState::AwaitingPhone => {
                if !self.is_valid_phone(input) {
                    return Transition::reply(current, replies::INVALID_PHONE);
                }
                let mut next = current.advance(ConversationState::AwaitingRegion);
                next.data.phone = Some(input.to_string());
                Transition::reply(next, replies::ASK_REGION)
            }

            ConversationState::AwaitingRegion => {
                let request = CustomerCreateRequest {
                    name: current.data.name.clone().unwrap_or_default(),
                    phone: current.data.phone.clone().unwrap_or_default(),
                    region: input.to_string(),
                };
                Transition::submit(current, BackendCall::CreateCustomer(request))
            }

            ConversationState::AwaitingSupportMessage => {
                let request = ChatLogRequest::user_query(sender_id, input, now);
                Transition::submit(current, BackendCall::LogChat(request))
            }
        }
    }

    /// Apply `input` to the conversation, calling the backend when the flow completes
    pub async fn advance(&self, sender_id: &str, conversation: &UserConversation, input: &str) -> Step {
        let transition = self.transition(conversation, sender_id, input, Utc::now());
        logging::log_transition(sender_id, conversation.state, transition.conversation.state);

        let reply = match transition.outcome {
            Outcome::Reply(text) => text,
            Outcome::Submit(call) => self.submit(&call).await,
        };

        Step {
            conversation: transition.conversation,
            reply,
        }
    }

    async fn submit(&self, call: &BackendCall) -> String {
        let result = match call {
            BackendCall::CreateCustomer(request) => self.post(call, request).await,
            BackendCall::LogChat(request) => self.post(call, request).await,
        };
        reply_for(call, &result)
    }

    async fn post<P: Serialize>(&self, call: &BackendCall, payload: &P) -> BackendResult {
        self.backend.call(call.endpoint(), payload, call.scope()).await
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Keyword routing from the initial state; first match wins
fn initial_menu(current: UserConversation, input: &str) -> Transition {
    let text = input.to_lowercase();

    if text.contains("register") {
        Transition::reply(current.advance(ConversationState::AwaitingName), replies::ASK_NAME)
    } else if contains_any(&text, &["bill", "payment"]) {
        // Prompt only: payment details are not parsed or forwarded.
        Transition::reply(current, replies::BILL_PAYMENT_FORMAT)
    } else if contains_any(&text, &["support", "complaint"]) {
        Transition::reply(current.advance(ConversationState::AwaitingSupportMessage), replies::ASK_SUPPORT_MESSAGE)
    } else {
        Transition::reply(current, replies::WELCOME)
    }
}

/// Reply text for a completed backend call
pub fn reply_for(call: &BackendCall, result: &BackendResult) -> String {
    let (succeeded, failed) = call.replies();

    match result {
        BackendResult::Success(_) => {
            let response = result.response().unwrap_or_default();
            if response.is_success() {
                logging::log_backend_outcome(call.endpoint(), true, None);
                response.message.unwrap_or_else(|| succeeded.to_string())
            } else {
                let detail = response.message.unwrap_or_else(|| replies::SERVICE_ERROR.to_string());
                logging::log_backend_outcome(call.endpoint(), false, Some(&detail));
                replies::failure(failed, &detail)
            }
        }
        BackendResult::Error(message) => {
            logging::log_backend_outcome(call.endpoint(), false, Some(message));
            replies::failure(failed, message)
        }
    }
}
