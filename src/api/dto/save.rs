//! DTOs for the save-url endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to persist a URL under an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The URL to map (must be syntactically valid).
    #[validate(url(message = "is not a valid URL"))]
    pub url: String,

    /// Optional human-chosen alias; one is generated when absent or empty.
    #[validate(length(max = 64, message = "is too long"))]
    pub alias: Option<String>,
}

/// Successful save response carrying the alias the URL was stored under.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: &'static str,
    pub alias: String,
}

impl SaveResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            status: "OK",
            alias,
        }
    }
}
