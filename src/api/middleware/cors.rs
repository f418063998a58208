//! Cross-origin access for the companion frontend.

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

/// Creates a CORS middleware allowing exactly one origin.
///
/// Permits `GET` and `POST` with a `Content-Type` header and credentials,
/// which covers the shorten and redirect routes the layer is applied to.
///
/// # Errors
///
/// Returns an error if `allowed_origin` is not a valid header value.
pub fn layer(allowed_origin: &str) -> Result<CorsLayer> {
    let origin: HeaderValue = allowed_origin
        .parse()
        .with_context(|| format!("Invalid ALLOWED_ORIGIN '{allowed_origin}'"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
