//! Publication category entity model and DTOs.

use pubarc_core::catalog::CategoryFlags;
use pubarc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `publication_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub archive_id: DbId,
    pub title: String,
    pub show_on_separate_page: bool,
    pub show_content_in_archive: bool,
    pub sort_position: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CategoryFlags for Category {
    fn title(&self) -> &str {
        &self.title
    }

    fn show_on_separate_page(&self) -> bool {
        self.show_on_separate_page
    }
}

/// DTO for creating a new category under an archive.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub title: String,
    /// Defaults to false if omitted.
    pub show_on_separate_page: Option<bool>,
    /// Defaults to false if omitted.
    pub show_content_in_archive: Option<bool>,
    pub sort_position: Option<i32>,
}

/// DTO for updating an existing category. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub title: Option<String>,
    pub show_on_separate_page: Option<bool>,
    pub show_content_in_archive: Option<bool>,
    pub sort_position: Option<i32>,
}
