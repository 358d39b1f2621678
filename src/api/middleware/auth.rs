//! HTTP Basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Gates a route behind HTTP Basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(username:password)
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` with a `WWW-Authenticate: Basic` challenge if:
/// - the Authorization header is missing or malformed
/// - the credentials do not match the configured pair
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((username, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::Unauthorized)?;

    let req = Request::from_parts(parts, body);

    if !st
        .auth_service
        .verify(&username, password.as_deref().unwrap_or_default())
    {
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(req).await)
}
