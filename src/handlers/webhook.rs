//! Webhook HTTP surface
//!
//! - `POST /` receives Viber callbacks. Any parseable event is acknowledged
//!   with 200 whatever happens to the conversation; an unparseable body gets
//!   400 and is otherwise ignored.
//! - `GET /set_webhook` registers the configured public URL with Viber.
//! - `GET /health` is a liveness probe.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{info, Instrument};
use uuid::Uuid;
use crate::models::InboundEvent;
use crate::services::ViberClient;
use crate::utils::errors::RelayError;
use crate::utils::logging;
use super::dispatcher::EventDispatcher;

/// Shared state of the webhook routes
#[derive(Clone, Debug)]
pub struct AppState {
    pub dispatcher: EventDispatcher,
    pub viber: ViberClient,
    pub webhook_url: Option<String>,
}

/// JSON body of the management endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiStatus {
    pub status: String,
    pub message: String,
}

impl ApiStatus {
    fn new(status: &str, message: impl Into<String>) -> Self {
        Self {
            status: status.to_string(),
            message: message.into(),
        }
    }
}

/// Build the webhook router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", post(incoming))
        .route("/set_webhook", get(set_webhook))
        .route("/health", get(health))
        .with_state(state)
}

async fn incoming(State(state): State<AppState>, body: Bytes) -> StatusCode {
    let span = tracing::info_span!("webhook", request_id = %Uuid::new_v4());

    async move {
        let event = match InboundEvent::parse(&body) {
            Ok(event) => event,
            Err(e) => {
                logging::log_api_error("webhook", &e, None);
                return StatusCode::BAD_REQUEST;
            }
        };

        info!(event = event.kind(), "Viber callback received");

        for reply in state.dispatcher.handle_inbound_event(event).await {
            if let Err(e) = state.viber.deliver(&reply).await {
                logging::log_api_error("viber", &RelayError::from(e), Some(&reply.receiver));
            }
        }

        StatusCode::OK
    }
    .instrument(span)
    .await
}

async fn set_webhook(State(state): State<AppState>) -> (StatusCode, Json<ApiStatus>) {
    let Some(url) = state.webhook_url.as_deref().filter(|url| !url.is_empty()) else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiStatus::new("error", "VIBER_WEBHOOK_URL environment variable not set.")),
        );
    };

    match state.viber.set_webhook(url).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiStatus::new("success", format!("Webhook set to {}", url))),
        ),
        Err(e) => {
            let message = format!("Failed to set webhook: {}", e);
            logging::log_api_error("viber", &RelayError::from(e), Some(url));
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiStatus::new("error", message)))
        }
    }
}

async fn health() -> Json<ApiStatus> {
    Json(ApiStatus::new("ok", "Viber Bot Middleware is running"))
}
