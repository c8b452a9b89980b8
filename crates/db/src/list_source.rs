//! The list-source capability.
//!
//! Archives and categories can both serve as the source of a publication
//! list: an archive yields every publication beneath it, a category yields
//! its own. Either way the archive's configured sort order applies.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::archive::Archive;
use crate::models::category::Category;
use crate::models::publication::Publication;
use crate::repositories::{ArchiveRepo, PublicationRepo};

/// Anything that can produce an ordered publication list.
#[async_trait]
pub trait ListSource {
    async fn list_items(&self, pool: &PgPool) -> Result<Vec<Publication>, sqlx::Error>;
}

#[async_trait]
impl ListSource for Archive {
    /// All publications under the archive, across its categories.
    async fn list_items(&self, pool: &PgPool) -> Result<Vec<Publication>, sqlx::Error> {
        PublicationRepo::list_by_archive(pool, self.id, self.sort()).await
    }
}

#[async_trait]
impl ListSource for Category {
    /// The category's publications, ordered per its parent archive.
    ///
    /// An orphaned category (absent parent) is not an error: it lists its
    /// publications in storage order.
    async fn list_items(&self, pool: &PgPool) -> Result<Vec<Publication>, sqlx::Error> {
        let archive = ArchiveRepo::find_by_id(pool, self.archive_id).await?;
        let order = archive.and_then(|a| a.sort());
        PublicationRepo::list_by_category(pool, self.id, order).await
    }
}
