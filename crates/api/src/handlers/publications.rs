//! Handlers for the `/publications` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pubarc_core::display;
use pubarc_core::error::CoreError;
use pubarc_core::forms;
use pubarc_core::types::DbId;
use pubarc_db::models::publication::{Publication, UpdatePublication};
use pubarc_db::models::publication_file::CreatePublicationFile;
use pubarc_db::repositories::{PublicationFileRepo, PublicationRepo};

use crate::error::{AppError, AppResult};
use crate::query::IncludeDisabledParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch a publication or return NotFound.
async fn find_publication(pool: &sqlx::PgPool, id: DbId) -> AppResult<Publication> {
    PublicationRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Publication",
            id,
        }))
}

/// GET /api/v1/publications/{id}
///
/// The publication row plus its derived detail texts.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let publication = find_publication(&state.pool, id).await?;
    let show_file_info = PublicationRepo::show_file_info(&state.pool, id)
        .await?
        .unwrap_or(false);

    let detail = serde_json::json!({
        "publication": publication,
        "number_of_pages": display::number_of_pages(publication.pages),
        "files_heading": display::FILES_HEADING,
        "show_file_info": show_file_info,
    });
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/publications/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePublication>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        forms::validate_title(title).map_err(AppError::Core)?;
    }

    let publication = PublicationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Publication",
            id,
        }))?;
    Ok(Json(DataResponse { data: publication }))
}

/// DELETE /api/v1/publications/{id}
///
/// Deletes the publication and its file records.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PublicationRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(publication_id = id, "Publication deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Publication",
            id,
        }))
    }
}

/// GET /api/v1/publications/{id}/files?include_disabled=false
///
/// The publication's files in manual order. By default only enabled files
/// are returned; the admin grid passes `include_disabled=true`.
pub async fn list_files(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<IncludeDisabledParams>,
) -> AppResult<impl IntoResponse> {
    find_publication(&state.pool, id).await?;
    let files =
        PublicationFileRepo::list_by_publication(&state.pool, id, params.include_disabled).await?;
    Ok(Json(DataResponse { data: files }))
}

/// POST /api/v1/publications/{id}/files
///
/// Create a file record under the publication. Saving publishes the
/// attached asset.
pub async fn create_file(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreatePublicationFile>,
) -> AppResult<impl IntoResponse> {
    find_publication(&state.pool, id).await?;
    forms::validate_publication_file(&input.name).map_err(AppError::Core)?;

    let file = PublicationFileRepo::create(&state.pool, id, &input).await?;

    tracing::info!(
        file_id = file.id,
        publication_id = id,
        asset_id = file.asset_id,
        "Publication file created, asset published",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: file })))
}
