//! ViberRelay Webhook Middleware
//!
//! Main application entry point

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use ViberRelay::{
    config::Settings,
    handlers::router,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", ViberRelay::info());

    let state = ViberRelay::build_app_state(&settings)?;
    if state.webhook_url.as_deref().map_or(true, str::is_empty) {
        info!("No webhook URL configured; /set_webhook will report an error");
    }

    let address = settings.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    info!(address = %address, backend = %settings.backend.base_url, "Webhook server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("webhook server failed")?;

    info!("ViberRelay has been shut down.");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
