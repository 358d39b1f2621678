//! Alias allocation and mapping persistence service.

use std::sync::Arc;

use crate::domain::entities::NewMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::alias_generator;

/// Alias length used when the client does not request one and no override is
/// configured.
pub const DEFAULT_ALIAS_LENGTH: usize = 10;

/// Collision-retry cap for generated aliases. The 62^10 keyspace makes even
/// one collision unlikely; the cap closes the liveness hole of an unbounded
/// loop.
const MAX_ALIAS_ATTEMPTS: usize = 10;

/// Service deciding the alias for a new mapping and delegating persistence
/// to the mapping store.
///
/// Stateless between calls; every read goes to the repository. Concurrent
/// saves racing for the same alias are arbitrated by the store's uniqueness
/// constraint, not by this service — the probe in [`Self::allocate_alias`]
/// is best-effort collision avoidance only.
pub struct AliasService {
    repository: Arc<dyn MappingRepository>,
    alias_length: usize,
}

impl AliasService {
    /// Creates a new alias service generating aliases of `alias_length`
    /// characters.
    pub fn new(repository: Arc<dyn MappingRepository>, alias_length: usize) -> Self {
        Self {
            repository,
            alias_length,
        }
    }

    /// Persists a mapping for `url` and returns the alias it was stored
    /// under.
    ///
    /// A non-empty `requested_alias` is used as-is; if it is taken, the
    /// store's [`AppError::AliasExists`] propagates directly. An absent or
    /// empty alias is generated with collision retry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasExists`] if the requested alias is taken,
    /// [`AppError::GenerationExhausted`] if no free alias was found within
    /// the retry cap, and [`AppError::Storage`] on database errors.
    pub async fn save(
        &self,
        url: String,
        requested_alias: Option<String>,
    ) -> Result<String, AppError> {
        let alias = match requested_alias.filter(|alias| !alias.is_empty()) {
            Some(alias) => alias,
            None => self.allocate_alias().await?,
        };

        let mapping = self.repository.insert(NewMapping { alias, url }).await?;

        Ok(mapping.alias)
    }

    /// Resolves an alias to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for the alias.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        self.repository
            .find_by_alias(alias)
            .await?
            .map(|mapping| mapping.url)
            .ok_or(AppError::NotFound)
    }

    /// Removes the mapping for an alias.
    ///
    /// Deleting an absent alias is a normal outcome, reported as
    /// [`AppError::NotFound`] so the HTTP layer can render a 404 rather
    /// than a 500.
    pub async fn remove(&self, alias: &str) -> Result<(), AppError> {
        if self.repository.delete(alias).await? {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }

    /// Picks a free generated alias, probing the store for each candidate.
    ///
    /// Gives up after [`MAX_ALIAS_ATTEMPTS`] collisions.
    async fn allocate_alias(&self) -> Result<String, AppError> {
        for _ in 0..MAX_ALIAS_ATTEMPTS {
            let candidate = alias_generator::generate(self.alias_length);

            if self.repository.find_by_alias(&candidate).await?.is_none() {
                return Ok(candidate);
            }
        }

        Err(AppError::GenerationExhausted)
    }
}
