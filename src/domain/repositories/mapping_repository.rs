//! Repository trait for alias → URL mapping data access.

use crate::domain::entities::{Mapping, NewMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for persisted URL mappings.
///
/// The backing store owns the uniqueness invariant on `alias`; callers rely
/// on [`AppError::AliasExists`] being distinguishable from generic storage
/// failure to tell "pick a different alias" apart from "the database is
/// down".
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Inserts a new mapping and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasExists`] if the alias is already taken.
    /// Returns [`AppError::Storage`] on other database errors.
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError>;

    /// Finds a mapping by its alias.
    ///
    /// Absence of a row is a normal outcome, reported as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<Mapping>, AppError>;

    /// Removes the mapping for an alias.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if no row
    /// matched the alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn delete(&self, alias: &str) -> Result<bool, AppError>;
}
