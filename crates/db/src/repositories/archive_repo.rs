//! Repository for the `publication_archives` table.

use pubarc_core::types::DbId;
use sqlx::PgPool;

use crate::models::archive::{Archive, CreateArchive, UpdateArchive};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, sort_order, show_file_info, image_align, \
    image_resize_width, image_resize_height, image_resize_method, \
    created_at, updated_at";

/// Provides CRUD operations for publication archives.
pub struct ArchiveRepo;

impl ArchiveRepo {
    /// Insert a new archive, returning the created row.
    ///
    /// If `show_file_info` is `None`, defaults to true. Image defaults
    /// follow the schema (`right`, 300x400, `scale-width`).
    pub async fn create(pool: &PgPool, input: &CreateArchive) -> Result<Archive, sqlx::Error> {
        let query = format!(
            "INSERT INTO publication_archives
                (title, sort_order, show_file_info, image_align,
                 image_resize_width, image_resize_height, image_resize_method)
             VALUES ($1, $2, COALESCE($3, TRUE), COALESCE($4, 'right'),
                 COALESCE($5, 300), COALESCE($6, 400), COALESCE($7, 'scale-width'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Archive>(&query)
            .bind(&input.title)
            .bind(&input.sort_order)
            .bind(input.show_file_info)
            .bind(&input.image_align)
            .bind(input.image_resize_width)
            .bind(input.image_resize_height)
            .bind(&input.image_resize_method)
            .fetch_one(pool)
            .await
    }

    /// Find an archive by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Archive>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM publication_archives WHERE id = $1");
        sqlx::query_as::<_, Archive>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all archives in storage order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Archive>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM publication_archives ORDER BY id ASC");
        sqlx::query_as::<_, Archive>(&query).fetch_all(pool).await
    }

    /// Update an archive. Only non-`None` fields in `input` are applied;
    /// `clear_sort_order` resets the sort order to NULL.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArchive,
    ) -> Result<Option<Archive>, sqlx::Error> {
        let query = format!(
            "UPDATE publication_archives SET
                title = COALESCE($2, title),
                sort_order = CASE WHEN $4 THEN NULL ELSE COALESCE($3, sort_order) END,
                show_file_info = COALESCE($5, show_file_info),
                image_align = COALESCE($6, image_align),
                image_resize_width = COALESCE($7, image_resize_width),
                image_resize_height = COALESCE($8, image_resize_height),
                image_resize_method = COALESCE($9, image_resize_method)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Archive>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.sort_order)
            .bind(input.clear_sort_order)
            .bind(input.show_file_info)
            .bind(&input.image_align)
            .bind(input.image_resize_width)
            .bind(input.image_resize_height)
            .bind(&input.image_resize_method)
            .fetch_optional(pool)
            .await
    }

    /// Delete an archive by ID, cascading through its categories,
    /// publications and files. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM publication_archives WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
