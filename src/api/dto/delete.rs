//! DTOs for the delete-url endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to remove the mapping for an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "is a required field"))]
    pub alias: String,
}

/// Bare success response.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: &'static str,
}

impl DeleteResponse {
    pub fn ok() -> Self {
        Self { status: "OK" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_request_requires_alias() {
        let request: DeleteRequest = serde_json::from_str("{}").unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_delete_request_accepts_alias() {
        let request: DeleteRequest = serde_json::from_str(r#"{"alias": "abc123"}"#).unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.alias, "abc123");
    }

    #[test]
    fn test_delete_response_serializes_status_ok() {
        let json = serde_json::to_value(DeleteResponse::ok()).unwrap();

        assert_eq!(json["status"], "OK");
    }
}
