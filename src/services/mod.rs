//! Services module
//!
//! This module contains the outbound integrations: the backend REST client
//! and the Viber bot API client.

pub mod backend;
pub mod viber;

pub use backend::{ApiScope, BackendClient, BackendResult};
pub use viber::{ViberClient, ViberStatus};

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub backend: BackendClient,
    pub viber: ViberClient,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            backend: BackendClient::new(&settings.backend)?,
            viber: ViberClient::new(&settings.viber)?,
        })
    }
}
