//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its mapped URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Errors
///
/// Returns 404 Not Found if no mapping exists for the alias.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let url = state.alias_service.resolve(&alias).await?;

    debug!(alias = %alias, url = %url, "redirecting");

    Ok(Redirect::temporary(&url))
}
