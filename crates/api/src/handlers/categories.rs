//! Handlers for the `/categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pubarc_core::error::CoreError;
use pubarc_core::forms;
use pubarc_core::types::DbId;
use pubarc_db::list_source::ListSource;
use pubarc_db::models::category::{Category, UpdateCategory};
use pubarc_db::models::publication::CreatePublication;
use pubarc_db::repositories::{CategoryRepo, PublicationRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch a category or return NotFound.
async fn find_category(pool: &sqlx::PgPool, id: DbId) -> AppResult<Category> {
    CategoryRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PublicationCategory",
            id,
        }))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = find_category(&state.pool, id).await?;
    Ok(Json(DataResponse { data: category }))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        forms::validate_title(title).map_err(AppError::Core)?;
    }

    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PublicationCategory",
            id,
        }))?;
    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/categories/{id}
///
/// Deletes the category and its publications.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(category_id = id, "Category deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "PublicationCategory",
            id,
        }))
    }
}

/// GET /api/v1/categories/{id}/publications
///
/// The category's publications, ordered per its parent archive.
pub async fn list_publications(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = find_category(&state.pool, id).await?;
    let publications = category.list_items(&state.pool).await?;
    Ok(Json(DataResponse { data: publications }))
}

/// POST /api/v1/categories/{id}/publications
pub async fn create_publication(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreatePublication>,
) -> AppResult<impl IntoResponse> {
    find_category(&state.pool, id).await?;
    forms::validate_title(&input.title).map_err(AppError::Core)?;

    let publication = PublicationRepo::create(&state.pool, id, &input).await?;

    tracing::info!(
        publication_id = publication.id,
        category_id = id,
        title = %publication.title,
        "Publication created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: publication })))
}
