//! Publication entity model and DTOs.

use pubarc_core::sort::SortKeys;
use pubarc_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `publications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Publication {
    pub id: DbId,
    pub category_id: DbId,
    pub title: String,
    /// Overview body text.
    pub content: Option<String>,
    pub date: Option<Date>,
    /// Always >= 0; clamped on write.
    pub pages: i32,
    pub author: Option<String>,
    pub sort_position: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SortKeys for Publication {
    fn position(&self) -> i32 {
        self.sort_position
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn date(&self) -> Option<Date> {
        self.date
    }
}

/// DTO for creating a new publication under a category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePublication {
    pub title: String,
    pub content: Option<String>,
    /// Defaults to the current date if omitted.
    pub date: Option<Date>,
    /// Defaults to 0 if omitted; negative values are clamped to 0.
    pub pages: Option<i32>,
    pub author: Option<String>,
    pub sort_position: Option<i32>,
}

/// DTO for updating an existing publication. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePublication {
    pub title: Option<String>,
    pub content: Option<String>,
    pub date: Option<Date>,
    /// Set true to clear the date entirely (takes precedence over `date`).
    #[serde(default)]
    pub clear_date: bool,
    pub pages: Option<i32>,
    pub author: Option<String>,
    pub sort_position: Option<i32>,
}
