//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`  - Alias redirect (public)
//! - `GET    /health`   - Health check (public)
//! - `POST   /url`      - Save a URL mapping (basic auth)
//! - `DELETE /url`      - Remove a URL mapping (basic auth)
//!
//! # Middleware
//!
//! - **Request id** - Generated per request and propagated to the response
//! - **Tracing** - Structured request/response logging, span tagged with the request id
//! - **Authentication** - HTTP Basic credentials on the mutation endpoints
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{delete_handler, health_handler, redirect_handler, save_handler};
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{Router, middleware};
use tower::{Layer, ServiceBuilder};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = Router::new()
        .route("/url", post(save_handler).delete(delete_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let router = Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(protected)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(tracing::layer())
                .layer(PropagateRequestIdLayer::x_request_id()),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
