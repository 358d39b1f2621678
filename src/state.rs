//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AliasService, AuthService};

#[derive(Clone)]
pub struct AppState {
    pub alias_service: Arc<AliasService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(alias_service: Arc<AliasService>, auth_service: Arc<AuthService>) -> Self {
        Self {
            alias_service,
            auth_service,
        }
    }
}
