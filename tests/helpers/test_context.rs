//! Test context for unified test setup
//!
//! Starts the backend and Viber mocks and wires a full application state
//! against them.

use std::time::Duration;
use ViberRelay::{
    config::Settings,
    handlers::{AppState, EventDispatcher},
    models::{ConversationState, InboundEvent, UserConversation},
    services::{BackendClient, ViberClient},
    state::{ConversationEngine, ConversationStore},
};

use super::{backend_mock::BackendMockServer, test_data, viber_mock::{ViberMockServer, TEST_AUTH_TOKEN}};

/// Unified test context that manages all test components
pub struct TestContext {
    pub backend: BackendMockServer,
    pub viber: ViberMockServer,
    pub settings: Settings,
    pub state: AppState,
}

impl TestContext {
    /// Create a new test context with the default backend timeout
    pub async fn new() -> Self {
        Self::with_backend_timeout(None).await
    }

    /// Create a test context whose backend client gives up after `timeout`
    pub async fn with_backend_timeout(timeout: Option<Duration>) -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let backend = BackendMockServer::new().await;
        let viber = ViberMockServer::new().await;
        let settings = test_settings(&backend.base_url(), &viber.api_url());

        let backend_client = match timeout {
            Some(timeout) => BackendClient::with_timeout(&settings.backend, timeout),
            None => BackendClient::new(&settings.backend),
        }
        .expect("backend client");

        let engine = ConversationEngine::new(backend_client).expect("engine");
        let state = AppState {
            dispatcher: EventDispatcher::new(ConversationStore::new(), engine),
            viber: ViberClient::new(&settings.viber).expect("viber client"),
            webhook_url: settings.viber.webhook_url.clone(),
        };

        Self { backend, viber, settings, state }
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.state.dispatcher
    }

    pub fn store(&self) -> &ConversationStore {
        self.state.dispatcher.store()
    }

    /// Send a text message as `user_id` and return the reply text
    pub async fn say(&self, user_id: &str, text: &str) -> String {
        let replies = self
            .dispatcher()
            .handle_inbound_event(test_data::text_message(user_id, text))
            .await;
        assert_eq!(replies.len(), 1, "expected exactly one reply to {:?}", text);
        assert_eq!(replies[0].receiver, user_id);
        replies[0].text.clone()
    }

    /// Send every message in order, returning all replies
    pub async fn say_all(&self, user_id: &str, texts: &[&str]) -> Vec<String> {
        let mut replies = Vec::new();
        for text in texts {
            replies.push(self.say(user_id, text).await);
        }
        replies
    }

    pub async fn conversation(&self, user_id: &str) -> UserConversation {
        self.store().get(user_id).await
    }

    pub async fn state_of(&self, user_id: &str) -> ConversationState {
        self.conversation(user_id).await.state
    }

    pub async fn dispatch(&self, event: InboundEvent) -> Vec<String> {
        self.dispatcher()
            .handle_inbound_event(event)
            .await
            .into_iter()
            .map(|reply| reply.text)
            .collect()
    }
}

/// Valid settings pointing at the mocks
pub fn test_settings(backend_url: &str, viber_url: &str) -> Settings {
    let mut settings = Settings::default();
    settings.viber.auth_token = TEST_AUTH_TOKEN.to_string();
    settings.viber.api_url = viber_url.to_string();
    settings.viber.webhook_url = Some("https://relay.example.com/".to_string());
    settings.backend.base_url = backend_url.to_string();
    settings.backend.customer_api_key = "customer-key".to_string();
    settings.backend.billing_api_key = "billing-key".to_string();
    settings.backend.chatlog_api_key = "chatlog-key".to_string();
    settings
}
