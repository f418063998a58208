//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Errors
///
/// Returns 404 Not Found with body `{ "detail": "Short code not found" }`
/// if the code doesn't exist. A miss leaves the store untouched.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    debug!("Received redirect request for short code: {code}");

    let link = state.link_service.get_link_by_code(&code).await?;

    debug!("Redirecting to {}", link.long_url);
    Ok(Redirect::temporary(&link.long_url))
}
