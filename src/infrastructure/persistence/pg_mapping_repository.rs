//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::repositories::MappingRepository;
use crate::error::{AppError, StorageOp};

/// PostgreSQL repository for alias → URL mappings.
///
/// The `url` table's unique constraint on `alias` is the authoritative
/// uniqueness invariant; this repository only translates its violation into
/// [`AppError::AliasExists`].
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Ensures the backing table and the secondary alias index exist.
    ///
    /// Idempotent; safe to run on every startup. The caller treats a failure
    /// here as fatal — the service must not start serving without its
    /// schema.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS url (
                id BIGSERIAL PRIMARY KEY,
                alias TEXT NOT NULL UNIQUE,
                url TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_url_alias ON url (alias)")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert(&self, new_mapping: NewMapping) -> Result<Mapping, AppError> {
        let row: (i64, String, String) = sqlx::query_as(
            "INSERT INTO url (alias, url) VALUES ($1, $2) RETURNING id, alias, url",
        )
        .bind(&new_mapping.alias)
        .bind(&new_mapping.url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_alias(&e) {
                AppError::AliasExists
            } else {
                AppError::storage(StorageOp::Save, e)
            }
        })?;

        Ok(Mapping::new(row.0, row.1, row.2))
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<Mapping>, AppError> {
        let row: Option<(i64, String, String)> =
            sqlx::query_as("SELECT id, alias, url FROM url WHERE alias = $1")
                .bind(alias)
                .fetch_optional(self.pool.as_ref())
                .await
                .map_err(|e| AppError::storage(StorageOp::Get, e))?;

        Ok(row.map(|(id, alias, url)| Mapping::new(id, alias, url)))
    }

    async fn delete(&self, alias: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = $1")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| AppError::storage(StorageOp::Delete, e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn is_unique_violation_on_alias(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    // The inline UNIQUE on `alias` is the only unique constraint besides the
    // primary key, and the bootstrap names it deterministically.
    matches!(db_err.constraint(), Some("url_alias_key"))
}
