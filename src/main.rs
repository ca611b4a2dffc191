//! enquiry-service server entry point.
//!
//! Starts the Axum HTTP server that accepts contact-form enquiries.

use tracing_subscriber::EnvFilter;

use enquiry_service::api;
use enquiry_service::app_state::AppState;
use enquiry_service::config::ServiceConfig;
use enquiry_service::persistence::store::EnquiryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = ServiceConfig::from_env()?;
    tracing::info!(
        addr = %config.listen_addr,
        variant = %config.variant,
        "starting enquiry-service"
    );

    // Connect and bootstrap the schema before accepting requests; a dead
    // database is a startup failure, not a per-request one
    let store = EnquiryStore::connect(&config).await?;
    store.ensure_schema().await?;
    tracing::info!(backend = %store.backend(), "database ready");

    // Build application state and router
    let app_state = AppState::new(store.clone(), config.variant);
    let app = api::build_app(app_state, &config)?;

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Drain the pool before exiting
    store.close().await;
    tracing::info!("shutdown complete");

    Ok(())
}

/// Resolves when Ctrl-C is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
