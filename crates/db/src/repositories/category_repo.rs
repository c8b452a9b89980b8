//! Repository for the `publication_categories` table.

use pubarc_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, archive_id, title, show_on_separate_page, \
    show_content_in_archive, sort_position, created_at, updated_at";

/// Provides CRUD operations for publication categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category under an archive, returning the created row.
    ///
    /// Both display flags default to false; `sort_position` defaults to 0.
    pub async fn create(
        pool: &PgPool,
        archive_id: DbId,
        input: &CreateCategory,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO publication_categories
                (archive_id, title, show_on_separate_page, show_content_in_archive, sort_position)
             VALUES ($1, $2, COALESCE($3, FALSE), COALESCE($4, FALSE), COALESCE($5, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(archive_id)
            .bind(&input.title)
            .bind(input.show_on_separate_page)
            .bind(input.show_content_in_archive)
            .bind(input.sort_position)
            .fetch_one(pool)
            .await
    }

    /// Find a category by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM publication_categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories under an archive in manual order.
    ///
    /// Note: the archive's publication sort order never applies here, only
    /// to the publications inside each category.
    pub async fn list_by_archive(
        pool: &PgPool,
        archive_id: DbId,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM publication_categories
             WHERE archive_id = $1
             ORDER BY sort_position ASC, id ASC"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(archive_id)
            .fetch_all(pool)
            .await
    }

    /// Update a category. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE publication_categories SET
                title = COALESCE($2, title),
                show_on_separate_page = COALESCE($3, show_on_separate_page),
                show_content_in_archive = COALESCE($4, show_content_in_archive),
                sort_position = COALESCE($5, sort_position)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.show_on_separate_page)
            .bind(input.show_content_in_archive)
            .bind(input.sort_position)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category by ID, cascading through its publications and
    /// files. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM publication_categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// True if the category holds at least one publication.
    pub async fn has_publications(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM publications WHERE category_id = $1)",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Effective "show file info" flag for a category, delegated to its
    /// parent archive. `None` for an orphaned category.
    pub async fn show_file_info(pool: &PgPool, id: DbId) -> Result<Option<bool>, sqlx::Error> {
        let row: Option<(bool,)> = sqlx::query_as(
            "SELECT publication_archives.show_file_info
             FROM publication_categories
             JOIN publication_archives
               ON publication_archives.id = publication_categories.archive_id
             WHERE publication_categories.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(show,)| show))
    }
}
