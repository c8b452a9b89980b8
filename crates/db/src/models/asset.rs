//! Uploaded asset record model and DTOs.
//!
//! Assets are the persisted boundary to the upload store: metadata plus a
//! storage key. The binary itself lives behind the storage key. Publishing
//! marks the asset publicly retrievable and happens as a side effect of
//! saving a publication file that references it.

use pubarc_core::fileinfo;
use pubarc_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub file_name: String,
    pub byte_size: i64,
    pub content_type: Option<String>,
    pub storage_key: String,
    pub published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Asset {
    /// Extension derived from the uploaded file name.
    pub fn extension(&self) -> Option<&str> {
        fileinfo::file_extension(&self.file_name)
    }

    /// Public download URL for the asset.
    pub fn url(&self) -> String {
        format!("/assets/{}", self.storage_key)
    }
}

/// DTO for registering an uploaded asset.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAsset {
    pub file_name: String,
    pub byte_size: i64,
    pub content_type: Option<String>,
}
