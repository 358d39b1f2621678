#![allow(dead_code)]

use async_trait::async_trait;
use axum::routing::{get, post};
use axum::{Router, middleware};
use axum_test::TestServer;
use linkcut::api::handlers::{delete_handler, redirect_handler, save_handler};
use linkcut::api::middleware::auth;
use linkcut::application::services::{AliasService, AuthService};
use linkcut::domain::entities::{Mapping, NewMapping};
use linkcut::domain::repositories::MappingRepository;
use linkcut::error::AppError;
use linkcut::state::AppState;
use std::sync::{Arc, Mutex};

pub const TEST_USER: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";

/// In-memory stand-in for the PostgreSQL repository, enforcing the same
/// uniqueness contract on alias.
#[derive(Default)]
pub struct InMemoryMappingRepository {
    rows: Mutex<Vec<Mapping>>,
}

impl InMemoryMappingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        let mut rows = self.rows.lock().unwrap();

        if rows.iter().any(|m| m.alias == new_mapping.alias) {
            return Err(AppError::AliasExists);
        }

        let id = rows.len() as i64 + 1;
        let mapping = Mapping::new(id, new_mapping.alias, new_mapping.url);
        rows.push(mapping.clone());

        Ok(mapping)
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<Mapping>, AppError> {
        let rows = self.rows.lock().unwrap();

        Ok(rows.iter().find(|m| m.alias == alias).cloned())
    }

    async fn delete(&self, alias: &str) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();

        rows.retain(|m| m.alias != alias);

        Ok(rows.len() < before)
    }
}

pub fn create_test_state() -> AppState {
    let repository = Arc::new(InMemoryMappingRepository::new());

    AppState::new(
        Arc::new(AliasService::new(repository, 10)),
        Arc::new(AuthService::new(
            TEST_USER.to_string(),
            TEST_PASSWORD.to_string(),
        )),
    )
}

/// Router with the mutation endpoints left open, for handler-level tests.
pub fn open_router(state: AppState) -> Router {
    Router::new()
        .route("/url", post(save_handler).delete(delete_handler))
        .route("/{alias}", get(redirect_handler))
        .with_state(state)
}

/// Router with the basic-auth gate applied, mirroring production routing.
pub fn protected_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/url", post(save_handler).delete(delete_handler))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/{alias}", get(redirect_handler))
        .merge(protected)
        .with_state(state)
}

pub fn test_server(router: Router) -> TestServer {
    TestServer::new(router).unwrap()
}
