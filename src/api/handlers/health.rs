//! Handler for the health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Reports service liveness and the current store size.
///
/// # Endpoint
///
/// `GET /health`
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, AppError> {
    let links = state.link_service.link_count().await?;

    Ok(Json(HealthResponse {
        status: "ok",
        links,
    }))
}
