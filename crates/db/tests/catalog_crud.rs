//! Integration tests for catalog entity CRUD.
//!
//! Exercises the full repository layer against a real database:
//! - Create full hierarchy (archive -> category -> publication -> file)
//! - Cascade delete behaviour
//! - Foreign key violations
//! - Field defaults and clamping
//! - Update and list operations

use pubarc_db::models::archive::{CreateArchive, UpdateArchive};
use pubarc_db::models::asset::CreateAsset;
use pubarc_db::models::category::CreateCategory;
use pubarc_db::models::publication::{CreatePublication, UpdatePublication};
use pubarc_db::models::publication_file::CreatePublicationFile;
use assert_matches::assert_matches;
use pubarc_db::repositories::{
    ArchiveRepo, AssetRepo, CategoryRepo, PublicationFileRepo, PublicationRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_archive(title: &str) -> CreateArchive {
    CreateArchive {
        title: title.to_string(),
        sort_order: None,
        show_file_info: None,
        image_align: None,
        image_resize_width: None,
        image_resize_height: None,
        image_resize_method: None,
    }
}

fn new_category(title: &str) -> CreateCategory {
    CreateCategory {
        title: title.to_string(),
        show_on_separate_page: None,
        show_content_in_archive: None,
        sort_position: None,
    }
}

fn new_publication(title: &str) -> CreatePublication {
    CreatePublication {
        title: title.to_string(),
        content: None,
        date: None,
        pages: None,
        author: None,
        sort_position: None,
    }
}

fn new_asset(file_name: &str, key: &str) -> (CreateAsset, String) {
    (
        CreateAsset {
            file_name: file_name.to_string(),
            byte_size: 1024,
            content_type: None,
        },
        key.to_string(),
    )
}

fn new_file(name: &str, asset_id: i64) -> CreatePublicationFile {
    CreatePublicationFile {
        name: name.to_string(),
        asset_id,
        sort_position: None,
        disabled: None,
    }
}

// ---------------------------------------------------------------------------
// Test: Full hierarchy creation with defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_full_hierarchy(pool: PgPool) {
    let archive = ArchiveRepo::create(&pool, &new_archive("Council Publications"))
        .await
        .unwrap();
    assert_eq!(archive.title, "Council Publications");
    assert!(archive.show_file_info); // default
    assert_eq!(archive.sort_order, None);
    assert_eq!(archive.image_align, "right");
    assert_eq!(archive.image_resize_width, 300);

    let category = CategoryRepo::create(&pool, archive.id, &new_category("Annual Reports"))
        .await
        .unwrap();
    assert_eq!(category.archive_id, archive.id);
    assert!(!category.show_on_separate_page); // default
    assert!(!category.show_content_in_archive); // default

    let publication = PublicationRepo::create(&pool, category.id, &new_publication("2018 Review"))
        .await
        .unwrap();
    assert_eq!(publication.category_id, category.id);
    assert_eq!(publication.pages, 0); // default
    assert!(publication.date.is_some(), "date defaults to today");

    let (asset_input, key) = new_asset("review.pdf", "publications/files/t1/review.pdf");
    let asset = AssetRepo::create(&pool, &asset_input, &key).await.unwrap();
    assert!(!asset.published);

    let file = PublicationFileRepo::create(&pool, publication.id, &new_file("Review", asset.id))
        .await
        .unwrap();
    assert_eq!(file.publication_id, publication.id);
    assert_eq!(file.asset_id, asset.id);
    assert!(!file.disabled); // default
}

// ---------------------------------------------------------------------------
// Test: Cascade delete archive removes all children
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_cascade_delete_archive(pool: PgPool) {
    let archive = ArchiveRepo::create(&pool, &new_archive("Cascade"))
        .await
        .unwrap();
    let category = CategoryRepo::create(&pool, archive.id, &new_category("Reports"))
        .await
        .unwrap();
    let publication = PublicationRepo::create(&pool, category.id, &new_publication("Doc"))
        .await
        .unwrap();
    let (asset_input, key) = new_asset("doc.pdf", "publications/files/t2/doc.pdf");
    let asset = AssetRepo::create(&pool, &asset_input, &key).await.unwrap();
    let file = PublicationFileRepo::create(&pool, publication.id, &new_file("Doc", asset.id))
        .await
        .unwrap();

    let deleted = ArchiveRepo::delete(&pool, archive.id).await.unwrap();
    assert!(deleted);

    assert!(CategoryRepo::find_by_id(&pool, category.id)
        .await
        .unwrap()
        .is_none());
    assert!(PublicationRepo::find_by_id(&pool, publication.id)
        .await
        .unwrap()
        .is_none());
    assert!(PublicationFileRepo::find_by_id(&pool, file.id)
        .await
        .unwrap()
        .is_none());

    // The asset survives the cascade and can now be deleted directly.
    assert!(AssetRepo::find_by_id(&pool, asset.id)
        .await
        .unwrap()
        .is_some());
    assert!(AssetRepo::delete(&pool, asset.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: FK violations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fk_violation_category_bad_archive(pool: PgPool) {
    let result = CategoryRepo::create(&pool, 999_999, &new_category("Ghost")).await;
    assert_matches!(
        result,
        Err(sqlx::Error::Database(_)),
        "FK violation should fail for non-existent archive_id"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_fk_violation_file_bad_asset(pool: PgPool) {
    let archive = ArchiveRepo::create(&pool, &new_archive("A")).await.unwrap();
    let category = CategoryRepo::create(&pool, archive.id, &new_category("C"))
        .await
        .unwrap();
    let publication = PublicationRepo::create(&pool, category.id, &new_publication("P"))
        .await
        .unwrap();

    let result = PublicationFileRepo::create(&pool, publication.id, &new_file("F", 999_999)).await;
    assert_matches!(
        result,
        Err(sqlx::Error::Database(_)),
        "FK violation should fail for non-existent asset_id"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_referenced_asset_cannot_be_deleted(pool: PgPool) {
    let archive = ArchiveRepo::create(&pool, &new_archive("A")).await.unwrap();
    let category = CategoryRepo::create(&pool, archive.id, &new_category("C"))
        .await
        .unwrap();
    let publication = PublicationRepo::create(&pool, category.id, &new_publication("P"))
        .await
        .unwrap();
    let (asset_input, key) = new_asset("held.pdf", "publications/files/t3/held.pdf");
    let asset = AssetRepo::create(&pool, &asset_input, &key).await.unwrap();
    PublicationFileRepo::create(&pool, publication.id, &new_file("Held", asset.id))
        .await
        .unwrap();

    let result = AssetRepo::delete(&pool, asset.id).await;
    assert_matches!(
        result,
        Err(sqlx::Error::Database(_)),
        "RESTRICT should block deleting a referenced asset"
    );
}

// ---------------------------------------------------------------------------
// Test: Duplicate storage key rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_storage_key_rejected(pool: PgPool) {
    let (input, key) = new_asset("a.pdf", "publications/files/dup/a.pdf");
    AssetRepo::create(&pool, &input, &key).await.unwrap();
    let result = AssetRepo::create(&pool, &input, &key).await;
    assert!(result.is_err(), "Duplicate storage key should fail");
}

// ---------------------------------------------------------------------------
// Test: Pages are clamped on write
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pages_clamped_to_zero(pool: PgPool) {
    let archive = ArchiveRepo::create(&pool, &new_archive("A")).await.unwrap();
    let category = CategoryRepo::create(&pool, archive.id, &new_category("C"))
        .await
        .unwrap();

    let mut input = new_publication("Clamped");
    input.pages = Some(-12);
    let publication = PublicationRepo::create(&pool, category.id, &input)
        .await
        .unwrap();
    assert_eq!(publication.pages, 0);

    let updated = PublicationRepo::update(
        &pool,
        publication.id,
        &UpdatePublication {
            title: None,
            content: None,
            date: None,
            clear_date: false,
            pages: Some(-5),
            author: None,
            sort_position: None,
        },
    )
    .await
    .unwrap()
    .expect("row exists");
    assert_eq!(updated.pages, 0);
}

// ---------------------------------------------------------------------------
// Test: Date can be cleared back to NULL
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_clear_date(pool: PgPool) {
    let archive = ArchiveRepo::create(&pool, &new_archive("A")).await.unwrap();
    let category = CategoryRepo::create(&pool, archive.id, &new_category("C"))
        .await
        .unwrap();
    let publication = PublicationRepo::create(&pool, category.id, &new_publication("Dated"))
        .await
        .unwrap();
    assert!(publication.date.is_some());

    let updated = PublicationRepo::update(
        &pool,
        publication.id,
        &UpdatePublication {
            title: None,
            content: None,
            date: None,
            clear_date: true,
            pages: None,
            author: None,
            sort_position: None,
        },
    )
    .await
    .unwrap()
    .expect("row exists");
    assert_eq!(updated.date, None);
}

// ---------------------------------------------------------------------------
// Test: Archive sort order update and clear
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_archive_sort_order_roundtrip(pool: PgPool) {
    let archive = ArchiveRepo::create(&pool, &new_archive("Sorted"))
        .await
        .unwrap();
    assert_eq!(archive.sort(), None);

    let updated = ArchiveRepo::update(
        &pool,
        archive.id,
        &UpdateArchive {
            title: None,
            sort_order: Some("date-desc".to_string()),
            clear_sort_order: false,
            show_file_info: None,
            image_align: None,
            image_resize_width: None,
            image_resize_height: None,
            image_resize_method: None,
        },
    )
    .await
    .unwrap()
    .expect("row exists");
    assert_eq!(
        updated.sort(),
        Some(pubarc_core::sort::SortOrder::DateDesc)
    );

    let cleared = ArchiveRepo::update(
        &pool,
        archive.id,
        &UpdateArchive {
            title: None,
            sort_order: None,
            clear_sort_order: true,
            show_file_info: None,
            image_align: None,
            image_resize_width: None,
            image_resize_height: None,
            image_resize_method: None,
        },
    )
    .await
    .unwrap()
    .expect("row exists");
    assert_eq!(cleared.sort_order, None);
}

// ---------------------------------------------------------------------------
// Test: Update / delete of non-existent rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_returns_none(pool: PgPool) {
    let result = PublicationRepo::update(
        &pool,
        999_999,
        &UpdatePublication {
            title: Some("Ghost".to_string()),
            content: None,
            date: None,
            clear_date: false,
            pages: None,
            author: None,
            sort_position: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_returns_false(pool: PgPool) {
    assert!(!ArchiveRepo::delete(&pool, 999_999).await.unwrap());
    assert!(!CategoryRepo::delete(&pool, 999_999).await.unwrap());
    assert!(!PublicationRepo::delete(&pool, 999_999).await.unwrap());
    assert!(!PublicationFileRepo::delete(&pool, 999_999).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: Categories list scoped to their archive in manual order
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_categories_scoped_and_ordered(pool: PgPool) {
    let a1 = ArchiveRepo::create(&pool, &new_archive("A1")).await.unwrap();
    let a2 = ArchiveRepo::create(&pool, &new_archive("A2")).await.unwrap();

    let mut second = new_category("Second");
    second.sort_position = Some(2);
    let mut first = new_category("First");
    first.sort_position = Some(1);

    CategoryRepo::create(&pool, a1.id, &second).await.unwrap();
    CategoryRepo::create(&pool, a1.id, &first).await.unwrap();
    CategoryRepo::create(&pool, a2.id, &new_category("Other"))
        .await
        .unwrap();

    let categories = CategoryRepo::list_by_archive(&pool, a1.id).await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].title, "First");
    assert_eq!(categories[1].title, "Second");
}
