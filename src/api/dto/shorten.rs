//! DTOs for the link shortening endpoint.

use crate::utils::url_check::validate_http_url;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be absolute HTTP/HTTPS).
    #[validate(custom(function = validate_http_url))]
    pub url: String,
}

/// Response for a successfully shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// The allocated 6-character code.
    pub short_code: String,
    /// Fully-qualified short URL (base address + code).
    pub short_url: String,
    /// The input URL, echoed unchanged.
    pub original_url: String,
}
