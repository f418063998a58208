//! DTO for the health check endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Number of stored links, seeded entry included.
    pub links: u64,
}
