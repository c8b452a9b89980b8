//! Handlers for the `/assets` resource.
//!
//! Registers metadata for uploaded binaries. The binary itself is stored
//! by the upload pipeline under the generated storage key; this API only
//! tracks the record and its published state.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pubarc_core::error::CoreError;
use pubarc_core::naming;
use pubarc_core::types::DbId;
use pubarc_db::models::asset::CreateAsset;
use pubarc_db::repositories::AssetRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/assets
///
/// Register an uploaded asset. The storage key is generated server-side.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAsset>,
) -> AppResult<impl IntoResponse> {
    if input.file_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "File name is required".into(),
        )));
    }

    let unique = uuid::Uuid::new_v4().to_string();
    let storage_key = naming::asset_storage_key(&unique, &input.file_name);

    let asset = AssetRepo::create(&state.pool, &input, &storage_key).await?;

    tracing::info!(
        asset_id = asset.id,
        file_name = %asset.file_name,
        storage_key = %asset.storage_key,
        "Asset registered",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// GET /api/v1/assets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Asset", id }))?;
    Ok(Json(DataResponse { data: asset }))
}

/// DELETE /api/v1/assets/{id}
///
/// Fails with 409 while a publication file still references the asset.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AssetRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(asset_id = id, "Asset deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Asset", id }))
    }
}
