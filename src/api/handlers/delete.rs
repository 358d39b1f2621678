//! Handler for the delete-url endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{debug, error, info};
use validator::Validate;

use crate::api::dto::delete::{DeleteRequest, DeleteResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Removes the mapping for an alias.
///
/// # Endpoint
///
/// `DELETE /url`
///
/// # Request Body
///
/// ```json
/// { "alias": "my-alias" }
/// ```
///
/// # Errors
///
/// - 400 with "failed to decode message" for malformed JSON
/// - 400 with a field-level message when `alias` is missing or empty
/// - 404 when no mapping exists for the alias
/// - 500 with "failed to delete" on storage failure
pub async fn delete_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeleteRequest>, JsonRejection>,
) -> Result<Json<DeleteResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        error!(error = %rejection, "failed to decode request body");
        AppError::Validation("failed to decode message".to_string())
    })?;

    debug!(alias = %request.alias, "request body decoded");

    if let Err(errors) = request.validate() {
        error!(error = %errors, "invalid request");
        return Err(errors.into());
    }

    state
        .alias_service
        .remove(&request.alias)
        .await
        .inspect_err(|e| match e {
            AppError::NotFound => info!(alias = %request.alias, "nothing to delete"),
            _ => error!(error = %e, "failed to delete url"),
        })?;

    info!(alias = %request.alias, "url deleted");

    Ok(Json(DeleteResponse::ok()))
}
