//! Handlers for the `/archives` resource.
//!
//! An archive is the root container of the catalog: it owns categories,
//! configures how publications are sorted, and drives the aggregate view.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pubarc_core::catalog::{self, NO_DATA_MESSAGE};
use pubarc_core::error::CoreError;
use pubarc_core::forms;
use pubarc_core::sort::SortOrder;
use pubarc_core::types::DbId;
use pubarc_db::models::archive::{CreateArchive, UpdateArchive};
use pubarc_db::models::category::CreateCategory;
use pubarc_db::repositories::{ArchiveRepo, CategoryRepo, PublicationRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Reject a sort order that is not one of the four known names.
fn validate_sort_order(sort_order: Option<&str>) -> AppResult<()> {
    if let Some(name) = sort_order {
        SortOrder::from_name(name).map_err(AppError::Core)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Archive CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/archives
///
/// List all archives.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let archives = ArchiveRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: archives }))
}

/// POST /api/v1/archives
///
/// Create a new archive.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateArchive>,
) -> AppResult<impl IntoResponse> {
    forms::validate_title(&input.title).map_err(AppError::Core)?;
    validate_sort_order(input.sort_order.as_deref())?;

    let archive = ArchiveRepo::create(&state.pool, &input).await?;

    tracing::info!(archive_id = archive.id, title = %archive.title, "Archive created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: archive })))
}

/// GET /api/v1/archives/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let archive = ArchiveRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PublicationArchive",
            id,
        }))?;
    Ok(Json(DataResponse { data: archive }))
}

/// PUT /api/v1/archives/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArchive>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        forms::validate_title(title).map_err(AppError::Core)?;
    }
    validate_sort_order(input.sort_order.as_deref())?;

    let archive = ArchiveRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PublicationArchive",
            id,
        }))?;
    Ok(Json(DataResponse { data: archive }))
}

/// DELETE /api/v1/archives/{id}
///
/// Deletes the archive and everything beneath it.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ArchiveRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(archive_id = id, "Archive deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "PublicationArchive",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Categories under an archive
// ---------------------------------------------------------------------------

/// GET /api/v1/archives/{id}/categories
///
/// List the archive's categories in manual order.
pub async fn list_categories(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_archive_exists(&state.pool, id).await?;
    let categories = CategoryRepo::list_by_archive(&state.pool, id).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/archives/{id}/categories
pub async fn create_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    ensure_archive_exists(&state.pool, id).await?;
    forms::validate_title(&input.title).map_err(AppError::Core)?;

    let category = CategoryRepo::create(&state.pool, id, &input).await?;

    tracing::info!(
        category_id = category.id,
        archive_id = id,
        title = %category.title,
        "Category created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

// ---------------------------------------------------------------------------
// Aggregate views
// ---------------------------------------------------------------------------

/// GET /api/v1/archives/{id}/publications
///
/// Every publication under the archive, ordered per its sort order.
pub async fn list_publications(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let archive = ArchiveRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PublicationArchive",
            id,
        }))?;

    let publications =
        PublicationRepo::list_by_archive(&state.pool, archive.id, archive.sort()).await?;
    Ok(Json(DataResponse { data: publications }))
}

/// GET /api/v1/archives/{id}/view
///
/// The archive front-page view: visible categories (non-empty and not
/// shown on a separate page) in manual order, each with its publications
/// sorted per the archive. An empty archive carries the no-data message.
pub async fn view(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let archive = ArchiveRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PublicationArchive",
            id,
        }))?;

    let mut pairs = Vec::new();
    for category in CategoryRepo::list_by_archive(&state.pool, archive.id).await? {
        let publications =
            PublicationRepo::list_by_category(&state.pool, category.id, archive.sort()).await?;
        pairs.push((category, publications));
    }

    let categories = catalog::visible_categories(pairs);
    let is_empty = categories.is_empty();

    let view = serde_json::json!({
        "archive": archive,
        "categories": categories,
        "is_empty": is_empty,
        "no_data_message": is_empty.then_some(NO_DATA_MESSAGE),
    });
    Ok(Json(DataResponse { data: view }))
}

/// Verify that an archive exists, returning NotFound if it does not.
async fn ensure_archive_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<()> {
    ArchiveRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PublicationArchive",
            id,
        }))?;
    Ok(())
}
