//! Repository for the `publications` table.
//!
//! Listing queries take the owning archive's configured sort order and turn
//! it into an ORDER BY fragment via [`SortOrder::order_by`]; `None` lists
//! in storage order.

use pubarc_core::sort::SortOrder;
use pubarc_core::types::DbId;
use sqlx::PgPool;

use crate::models::publication::{CreatePublication, Publication, UpdatePublication};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category_id, title, content, date, pages, author, \
    sort_position, created_at, updated_at";

/// Column list qualified for joined queries, where `id` and `title` would
/// otherwise be ambiguous.
const QUALIFIED_COLUMNS: &str = "publications.id, publications.category_id, \
    publications.title, publications.content, publications.date, \
    publications.pages, publications.author, publications.sort_position, \
    publications.created_at, publications.updated_at";

/// Provides CRUD operations for publications.
pub struct PublicationRepo;

impl PublicationRepo {
    /// Insert a new publication under a category, returning the created row.
    ///
    /// If `date` is `None`, defaults to the current date. `pages` defaults
    /// to 0 and negative values are clamped to 0.
    pub async fn create(
        pool: &PgPool,
        category_id: DbId,
        input: &CreatePublication,
    ) -> Result<Publication, sqlx::Error> {
        let query = format!(
            "INSERT INTO publications
                (category_id, title, content, date, pages, author, sort_position)
             VALUES ($1, $2, $3, COALESCE($4, CURRENT_DATE),
                 GREATEST(COALESCE($5, 0), 0), $6, COALESCE($7, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Publication>(&query)
            .bind(category_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.date)
            .bind(input.pages)
            .bind(&input.author)
            .bind(input.sort_position)
            .fetch_one(pool)
            .await
    }

    /// Find a publication by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Publication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM publications WHERE id = $1");
        sqlx::query_as::<_, Publication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the publications in one category, ordered per `order`.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
        order: Option<SortOrder>,
    ) -> Result<Vec<Publication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM publications
             WHERE category_id = $1
             ORDER BY {}",
            SortOrder::order_by(order)
        );
        sqlx::query_as::<_, Publication>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// List every publication under an archive across all of its
    /// categories, ordered per `order`.
    pub async fn list_by_archive(
        pool: &PgPool,
        archive_id: DbId,
        order: Option<SortOrder>,
    ) -> Result<Vec<Publication>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} FROM publications
             JOIN publication_categories
               ON publication_categories.id = publications.category_id
             WHERE publication_categories.archive_id = $1
             ORDER BY {}",
            SortOrder::order_by(order)
        );
        sqlx::query_as::<_, Publication>(&query)
            .bind(archive_id)
            .fetch_all(pool)
            .await
    }

    /// Update a publication. Only non-`None` fields in `input` are applied;
    /// `clear_date` resets the date to NULL and wins over `date`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePublication,
    ) -> Result<Option<Publication>, sqlx::Error> {
        let query = format!(
            "UPDATE publications SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                date = CASE WHEN $5 THEN NULL ELSE COALESCE($4, date) END,
                pages = GREATEST(COALESCE($6, pages), 0),
                author = COALESCE($7, author),
                sort_position = COALESCE($8, sort_position)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Publication>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.date)
            .bind(input.clear_date)
            .bind(input.pages)
            .bind(&input.author)
            .bind(input.sort_position)
            .fetch_optional(pool)
            .await
    }

    /// Effective "show file info" flag for a publication, delegated through
    /// its category to the archive. `None` if any link of the chain is
    /// missing.
    pub async fn show_file_info(pool: &PgPool, id: DbId) -> Result<Option<bool>, sqlx::Error> {
        let row: Option<(bool,)> = sqlx::query_as(
            "SELECT publication_archives.show_file_info
             FROM publications
             JOIN publication_categories
               ON publication_categories.id = publications.category_id
             JOIN publication_archives
               ON publication_archives.id = publication_categories.archive_id
             WHERE publications.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(show,)| show))
    }

    /// Delete a publication by ID, cascading through its files. Returns
    /// `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM publications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
