//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/shorten` - Create a short link (CORS-enabled)
//! - `GET  /{code}`      - Short link redirect (CORS-enabled)
//! - `GET  /health`      - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Single configured frontend origin, shorten and redirect only
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The CORS layer covers only the shorten and redirect routes; the health
/// endpoint is registered after it and stays same-origin.
pub fn app_router(state: AppState, cors: CorsLayer) -> NormalizePath<Router> {
    let api_router = Router::new().route("/shorten", post(shorten_handler));

    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .nest("/api", api_router)
        .layer(cors)
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
