//! DTOs for health check endpoint.

use serde::Serialize;

/// Service health status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
