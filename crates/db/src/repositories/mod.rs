//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod archive_repo;
pub mod asset_repo;
pub mod category_repo;
pub mod publication_file_repo;
pub mod publication_repo;

pub use archive_repo::ArchiveRepo;
pub use asset_repo::AssetRepo;
pub use category_repo::CategoryRepo;
pub use publication_file_repo::PublicationFileRepo;
pub use publication_repo::PublicationRepo;
