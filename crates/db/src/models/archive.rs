//! Publication archive entity model and DTOs.

use pubarc_core::sort::SortOrder;
use pubarc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `publication_archives` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Archive {
    pub id: DbId,
    pub title: String,
    /// One of the four sort-order names, or NULL for no sort. Read through
    /// [`Archive::sort`] so unknown legacy values degrade to no sort.
    pub sort_order: Option<String>,
    pub show_file_info: bool,
    // -- Image defaults for list rendering --
    pub image_align: String,
    pub image_resize_width: i32,
    pub image_resize_height: i32,
    pub image_resize_method: String,
    // -- Timestamps --
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Archive {
    /// The configured publication sort order, if any.
    pub fn sort(&self) -> Option<SortOrder> {
        SortOrder::parse(self.sort_order.as_deref())
    }
}

/// DTO for creating a new archive.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArchive {
    pub title: String,
    pub sort_order: Option<String>,
    /// Defaults to true if omitted.
    pub show_file_info: Option<bool>,
    pub image_align: Option<String>,
    pub image_resize_width: Option<i32>,
    pub image_resize_height: Option<i32>,
    pub image_resize_method: Option<String>,
}

/// DTO for updating an existing archive. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateArchive {
    pub title: Option<String>,
    pub sort_order: Option<String>,
    /// Set true to clear the sort order back to "no sort".
    #[serde(default)]
    pub clear_sort_order: bool,
    pub show_file_info: Option<bool>,
    pub image_align: Option<String>,
    pub image_resize_width: Option<i32>,
    pub image_resize_height: Option<i32>,
    pub image_resize_method: Option<String>,
}
