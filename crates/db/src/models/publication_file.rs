//! Publication file entity model and DTOs.
//!
//! A file record pairs a display name with one uploaded asset. Files list
//! in `sort_position` order; disabled files stay editable in the admin but
//! are dropped from the public listing.

use pubarc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `publication_files` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PublicationFile {
    pub id: DbId,
    pub publication_id: DbId,
    pub asset_id: DbId,
    pub name: String,
    pub sort_position: i32,
    pub disabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new file under a publication.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePublicationFile {
    pub name: String,
    pub asset_id: DbId,
    pub sort_position: Option<i32>,
    /// Defaults to false if omitted.
    pub disabled: Option<bool>,
}

/// DTO for updating an existing file. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePublicationFile {
    pub name: Option<String>,
    pub asset_id: Option<DbId>,
    pub sort_position: Option<i32>,
    pub disabled: Option<bool>,
}
