//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, schema bootstrap, state wiring, and the Axum
//! server lifecycle.

use crate::application::services::{AliasService, AuthService};
use crate::config::Config;
use crate::infrastructure::persistence::PgMappingRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (bounded acquire/idle/lifetime)
/// - Schema bootstrap (create-if-absent table and index)
/// - Application services and router
///
/// # Errors
///
/// Any failure before the listener is up is fatal: the service must not
/// begin serving without a reachable store and an ensured schema.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    tracing::info!("Connected to database");

    let repository = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    repository
        .ensure_schema()
        .await
        .context("failed to ensure storage schema")?;
    tracing::info!("Storage schema ensured");

    let alias_service = Arc::new(AliasService::new(repository, config.alias_length));
    let auth_service = Arc::new(AuthService::new(
        config.http_user.clone(),
        config.http_password.clone(),
    ));

    let state = AppState::new(alias_service, auth_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install shutdown handler: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
