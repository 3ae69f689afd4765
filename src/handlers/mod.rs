//! Webhook handlers module
//!
//! This module contains the inbound side of the relay:
//! - the event dispatcher that drives conversations
//! - the axum routes Viber and operators call

pub mod dispatcher;
pub mod webhook;

pub use dispatcher::EventDispatcher;
pub use webhook::{router, ApiStatus, AppState};
