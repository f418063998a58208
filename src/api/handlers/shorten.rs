//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_code": "aB3xY9",
///   "short_url": "http://localhost:5000/aB3xY9",
///   "original_url": "https://example.com/some/long/path"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing or not an absolute
/// http(s) URL. Nothing is stored in that case.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state.link_service.create_short_link(payload.url).await?;
    let short_url = state.link_service.get_short_url(&state.base_url, &link.code);

    Ok(Json(ShortenResponse {
        short_code: link.code,
        short_url,
        original_url: link.long_url,
    }))
}
