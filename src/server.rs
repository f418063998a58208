//! HTTP server initialization and runtime setup.
//!
//! Builds the in-memory store, seeds the example entry, and runs the Axum
//! server until a shutdown signal arrives.

use crate::api::middleware::cors;
use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::memory::{EXAMPLE_CODE, EXAMPLE_URL, MemoryLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The in-memory link store, seeded with the example mapping
/// - The link service and shared application state
/// - The Axum HTTP server with CORS and tracing middleware
///
/// # Errors
///
/// Returns an error if the configured origin is invalid, the bind fails,
/// or a server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(MemoryLinkRepository::with_example_entry());
    tracing::info!("Store seeded with example mapping {EXAMPLE_CODE} -> {EXAMPLE_URL}");

    let link_service = Arc::new(LinkService::new(repository));
    let state = AppState::new(link_service, config.base_url.clone());

    let cors = cors::layer(&config.allowed_origin)?;
    let app = app_router(state, cors);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
    tracing::info!("Shutdown signal received");
}
