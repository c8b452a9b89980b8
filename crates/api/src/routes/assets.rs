//! Route definitions for uploaded asset records.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Routes mounted at `/assets`.
///
/// ```text
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assets", post(assets::create))
        .route(
            "/assets/{id}",
            get(assets::get_by_id).delete(assets::delete),
        )
}
