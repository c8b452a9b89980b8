//! Repository for the `assets` table.

use pubarc_core::types::DbId;
use sqlx::PgPool;

use crate::models::asset::{Asset, CreateAsset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, file_name, byte_size, content_type, storage_key, \
    published, published_at, created_at, updated_at";

/// Provides CRUD operations for uploaded asset records.
pub struct AssetRepo;

impl AssetRepo {
    /// Register an uploaded asset, returning the created row.
    ///
    /// The storage key is computed by the caller (see
    /// `pubarc_core::naming::asset_storage_key`); negative byte sizes are
    /// clamped to 0.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAsset,
        storage_key: &str,
    ) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (file_name, byte_size, content_type, storage_key)
             VALUES ($1, GREATEST($2, 0), $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&input.file_name)
            .bind(input.byte_size)
            .bind(&input.content_type)
            .bind(storage_key)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Mark an asset published. Returns `true` if a row was affected.
    ///
    /// Idempotent: re-publishing keeps the original `published_at`.
    pub async fn publish(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE assets
             SET published = TRUE, published_at = COALESCE(published_at, NOW())
             WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an asset by ID. Fails with a foreign-key violation while any
    /// publication file still references it. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
