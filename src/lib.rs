//! ViberRelay Webhook Middleware
//!
//! Receives Viber bot callbacks, walks each user through a short guided
//! conversation (registration, support requests) and forwards the collected
//! data to a backend REST API, turning the backend's answers into replies.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{RelayError, Result};

// Re-export main components for easy access
pub use handlers::{AppState, EventDispatcher};
pub use services::ServiceFactory;
pub use state::{ConversationEngine, ConversationStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}

/// Wire the services, store and dispatcher into the router state
pub fn build_app_state(settings: &Settings) -> Result<AppState> {
    let services = ServiceFactory::new(settings)?;
    let engine = ConversationEngine::new(services.backend.clone())?;
    let dispatcher = EventDispatcher::new(ConversationStore::new(), engine);

    Ok(AppState {
        dispatcher,
        viber: services.viber,
        webhook_url: settings.viber.webhook_url.clone(),
    })
}
