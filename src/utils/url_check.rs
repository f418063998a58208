//! Target URL validation.
//!
//! Validation happens at the transport boundary; the store itself never
//! inspects URLs.

use url::Url;
use validator::ValidationError;

/// Validates that a string is an absolute `http` or `https` URL.
///
/// The stored URL is the caller's original string, byte for byte; parsing
/// here is only a shape check.
///
/// # Errors
///
/// Returns [`ValidationError`] if the string does not parse as an absolute
/// URL or its scheme is anything other than `http` or `https`.
pub fn validate_http_url(url: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(url)
        .map_err(|_| invalid("URL must be an absolute http:// or https:// address"))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid("URL scheme must be http or https"));
    }

    Ok(())
}

fn invalid(message: &'static str) -> ValidationError {
    ValidationError::new("invalid_url").with_message(message.into())
}
