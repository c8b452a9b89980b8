//! Repository for the `publication_files` table.
//!
//! Saving a file record (create or update) publishes its attached asset in
//! the same transaction, so a file can never point at an unpublished asset
//! once saved.

use pubarc_core::types::DbId;
use sqlx::PgPool;

use crate::models::publication_file::{
    CreatePublicationFile, PublicationFile, UpdatePublicationFile,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, publication_id, asset_id, name, sort_position, \
    disabled, created_at, updated_at";

/// Provides CRUD operations for publication files.
pub struct PublicationFileRepo;

impl PublicationFileRepo {
    /// Insert a new file under a publication and publish its asset,
    /// returning the created row.
    pub async fn create(
        pool: &PgPool,
        publication_id: DbId,
        input: &CreatePublicationFile,
    ) -> Result<PublicationFile, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO publication_files
                (publication_id, asset_id, name, sort_position, disabled)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, FALSE))
             RETURNING {COLUMNS}"
        );
        let file = sqlx::query_as::<_, PublicationFile>(&query)
            .bind(publication_id)
            .bind(input.asset_id)
            .bind(&input.name)
            .bind(input.sort_position)
            .bind(input.disabled)
            .fetch_one(&mut *tx)
            .await?;

        publish_asset(&mut tx, file.asset_id).await?;

        tx.commit().await?;
        Ok(file)
    }

    /// Find a file by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PublicationFile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM publication_files WHERE id = $1");
        sqlx::query_as::<_, PublicationFile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the files of a publication in manual order.
    ///
    /// With `include_disabled` false only enabled files are returned,
    /// preserving relative order.
    pub async fn list_by_publication(
        pool: &PgPool,
        publication_id: DbId,
        include_disabled: bool,
    ) -> Result<Vec<PublicationFile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM publication_files
             WHERE publication_id = $1 AND (disabled = FALSE OR $2)
             ORDER BY sort_position ASC, id ASC"
        );
        sqlx::query_as::<_, PublicationFile>(&query)
            .bind(publication_id)
            .bind(include_disabled)
            .fetch_all(pool)
            .await
    }

    /// Update a file and publish its (possibly replaced) asset. Only
    /// non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePublicationFile,
    ) -> Result<Option<PublicationFile>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE publication_files SET
                name = COALESCE($2, name),
                asset_id = COALESCE($3, asset_id),
                sort_position = COALESCE($4, sort_position),
                disabled = COALESCE($5, disabled)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let file = sqlx::query_as::<_, PublicationFile>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.asset_id)
            .bind(input.sort_position)
            .bind(input.disabled)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(file) = &file {
            publish_asset(&mut tx, file.asset_id).await?;
        }

        tx.commit().await?;
        Ok(file)
    }

    /// Delete a file by ID. The referenced asset is left in place. Returns
    /// `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM publication_files WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Effective "show info" flag for a file: the owning archive's
    /// `show_file_info`, reached by walking file -> publication ->
    /// category -> archive. `None` if any link of the chain is missing.
    pub async fn show_file_info(pool: &PgPool, id: DbId) -> Result<Option<bool>, sqlx::Error> {
        let row: Option<(bool,)> = sqlx::query_as(
            "SELECT publication_archives.show_file_info
             FROM publication_files
             JOIN publications
               ON publications.id = publication_files.publication_id
             JOIN publication_categories
               ON publication_categories.id = publications.category_id
             JOIN publication_archives
               ON publication_archives.id = publication_categories.archive_id
             WHERE publication_files.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(show,)| show))
    }
}

/// Mark an asset published, keeping the first publish timestamp.
async fn publish_asset(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    asset_id: DbId,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE assets
         SET published = TRUE, published_at = COALESCE(published_at, NOW())
         WHERE id = $1",
    )
    .bind(asset_id)
    .execute(&mut **tx)
    .await?;
    tracing::debug!(asset_id, "Asset published on file save");
    Ok(())
}
