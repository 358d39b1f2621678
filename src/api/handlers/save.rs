//! Handler for the save-url endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{debug, error, info};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Persists a URL under a requested or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "my-alias" }
/// ```
///
/// `alias` is optional; when absent or empty a random 10-character
/// alphanumeric alias is allocated.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "my-alias" }
/// ```
///
/// # Errors
///
/// - 400 with "failed to decode message" for malformed JSON
/// - 400 with field-level messages for invalid input
/// - 409 with "url already exists" when the alias is taken
/// - 500 with "failed save url" on storage failure
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        error!(error = %rejection, "failed to decode request body");
        AppError::Validation("failed to decode message".to_string())
    })?;

    debug!(url = %request.url, alias = ?request.alias, "request body decoded");

    if let Err(errors) = request.validate() {
        error!(error = %errors, "invalid request");
        return Err(errors.into());
    }

    let alias = state
        .alias_service
        .save(request.url.clone(), request.alias)
        .await
        .inspect_err(|e| match e {
            AppError::AliasExists => info!(url = %request.url, "url already exists"),
            _ => error!(error = %e, "failed to save url"),
        })?;

    info!(url = %request.url, alias = %alias, "url saved");

    Ok(Json(SaveResponse::ok(alias)))
}
