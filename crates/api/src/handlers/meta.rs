//! Handlers for the `/meta` resource: editing-form metadata the admin UI
//! renders forms from.

use axum::extract::Path;
use axum::response::IntoResponse;
use axum::Json;
use pubarc_core::forms;
use pubarc_core::sort::SortOrder;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// GET /api/v1/meta/sort-orders
///
/// The options offered by the archive sort-order dropdown.
pub async fn sort_orders() -> AppResult<impl IntoResponse> {
    let options: Vec<_> = SortOrder::options()
        .into_iter()
        .map(|(value, label)| serde_json::json!({ "value": value, "label": label }))
        .collect();
    Ok(Json(DataResponse { data: options }))
}

/// GET /api/v1/meta/fields/{entity}
///
/// Editing-form field descriptors for one entity type.
pub async fn fields(Path(entity): Path<String>) -> AppResult<impl IntoResponse> {
    let fields = match entity.as_str() {
        "archive" => forms::archive_fields(),
        "category" => forms::category_fields(),
        "publication" => forms::publication_fields(),
        "publication-file" => forms::publication_file_fields(),
        other => {
            return Err(AppError::BadRequest(format!(
                "Unknown entity '{other}'. Must be one of: archive, category, publication, publication-file"
            )));
        }
    };
    Ok(Json(DataResponse { data: fields }))
}
