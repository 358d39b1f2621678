//! Application error taxonomy and its HTTP rendering.
//!
//! Every fallible path in the service reports one of the [`AppError`]
//! variants. The HTTP layer renders them through [`IntoResponse`] into the
//! wire format `{"status": "Error", "error": "..."}`.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Wire format for error responses.
#[derive(Serialize)]
struct ErrorBody {
    status: &'static str,
    error: String,
}

/// Logical store operation that failed, used to tag storage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp {
    Save,
    Get,
    Delete,
}

impl StorageOp {
    fn as_str(self) -> &'static str {
        match self {
            StorageOp::Save => "save url",
            StorageOp::Get => "get url",
            StorageOp::Delete => "delete url",
        }
    }
}

impl std::fmt::Display for StorageOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or invalid request body.
    #[error("{0}")]
    Validation(String),

    /// The alias is already mapped to a URL.
    #[error("alias already exists")]
    AliasExists,

    /// No mapping exists for the alias.
    #[error("no mapping for alias")]
    NotFound,

    /// Missing or invalid basic-auth credentials.
    #[error("unauthorized")]
    Unauthorized,

    /// The collision-retry cap was reached without finding a free alias.
    #[error("gave up allocating a free alias")]
    GenerationExhausted,

    /// A store call failed for reasons other than the above.
    #[error("storage {op} failed: {source}")]
    Storage {
        op: StorageOp,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    /// Wraps a database error with the logical operation that issued it.
    pub fn storage(op: StorageOp, source: sqlx::Error) -> Self {
        Self::Storage { op, source }
    }

    /// Message exposed to clients. Storage details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::Validation(message) => message.clone(),
            AppError::AliasExists => "url already exists".to_string(),
            AppError::NotFound => "url not found".to_string(),
            AppError::Unauthorized => "unauthorized".to_string(),
            AppError::GenerationExhausted => "failed to generate alias".to_string(),
            AppError::Storage { op, .. } => match op {
                StorageOp::Save => "failed save url".to_string(),
                StorageOp::Get => "failed to get url".to_string(),
                StorageOp::Delete => "failed to delete".to_string(),
            },
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::AliasExists => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::GenerationExhausted | AppError::Storage { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            status: "Error",
            error: self.public_message(),
        };

        let mut response = (status, Json(body)).into_response();

        if matches!(self, AppError::Unauthorized) {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Basic realm=\"linkcut\""),
            );
        }

        response
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors.iter().map(move |error| match &error.message {
                    Some(message) => format!("field {field} {message}"),
                    None => format!("field {field} is not valid"),
                })
            })
            .collect();

        // HashMap iteration order is unstable; sort for deterministic bodies.
        messages.sort();

        AppError::Validation(messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_alias_exists_renders_conflict() {
        let response = AppError::AliasExists.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json = body_json(response).await;
        assert_eq!(json["status"], "Error");
        assert_eq!(json["error"], "url already exists");
    }

    #[tokio::test]
    async fn test_not_found_renders_404() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"], "url not found");
    }

    #[tokio::test]
    async fn test_validation_renders_bad_request_with_message() {
        let response = AppError::Validation("failed to decode message".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "failed to decode message");
    }

    #[tokio::test]
    async fn test_unauthorized_carries_challenge_header() {
        let response = AppError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let challenge = response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(challenge.starts_with("Basic realm="));
    }

    #[tokio::test]
    async fn test_storage_error_hides_details() {
        let response = AppError::storage(StorageOp::Save, sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "failed save url");
    }

    #[tokio::test]
    async fn test_delete_storage_error_message() {
        let response =
            AppError::storage(StorageOp::Delete, sqlx::Error::PoolClosed).into_response();

        let json = body_json(response).await;
        assert_eq!(json["error"], "failed to delete");
    }

    #[test]
    fn test_storage_error_display_includes_operation() {
        let error = AppError::storage(StorageOp::Get, sqlx::Error::PoolClosed);
        assert!(error.to_string().contains("get url"));
    }
}
