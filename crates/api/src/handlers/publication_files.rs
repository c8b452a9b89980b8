//! Handlers for the `/files` resource.
//!
//! A file's GET response carries the derived presentation fields alongside
//! the row: type (uppercased asset extension), human-readable size, the
//! joined info string, the inherited show-info flag, and the download URL.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pubarc_core::error::CoreError;
use pubarc_core::fileinfo;
use pubarc_core::forms;
use pubarc_core::types::DbId;
use pubarc_db::models::publication_file::UpdatePublicationFile;
use pubarc_db::repositories::{AssetRepo, PublicationFileRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/files/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let file = PublicationFileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PublicationFile",
            id,
        }))?;

    // Derived components degrade to absent rather than failing.
    let asset = AssetRepo::find_by_id(&state.pool, file.asset_id).await?;
    let file_type = asset
        .as_ref()
        .and_then(|a| a.extension())
        .map(fileinfo::file_type);
    let size = asset.as_ref().map(|a| fileinfo::format_byte_size(a.byte_size));
    let info = fileinfo::file_info(file_type.as_deref(), size.as_deref());
    let show_info = PublicationFileRepo::show_file_info(&state.pool, id)
        .await?
        .unwrap_or(false);

    let detail = serde_json::json!({
        "file": file,
        "type": file_type,
        "size": size,
        "info": info,
        "show_info": show_info,
        "url": asset.map(|a| a.url()),
    });
    Ok(Json(DataResponse { data: detail }))
}

/// PUT /api/v1/files/{id}
///
/// Update a file record. Saving publishes the (possibly replaced) asset.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePublicationFile>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        forms::validate_publication_file(name).map_err(AppError::Core)?;
    }

    let file = PublicationFileRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PublicationFile",
            id,
        }))?;

    tracing::info!(file_id = file.id, asset_id = file.asset_id, "Publication file updated");

    Ok(Json(DataResponse { data: file }))
}

/// DELETE /api/v1/files/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = PublicationFileRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(file_id = id, "Publication file deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "PublicationFile",
            id,
        }))
    }
}
