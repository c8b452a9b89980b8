//! Route definitions for publications.

use axum::routing::get;
use axum::Router;

use crate::handlers::publications;
use crate::state::AppState;

/// Routes mounted at `/publications`.
///
/// ```text
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /{id}/files    -> list_files
/// POST   /{id}/files    -> create_file
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/publications/{id}",
            get(publications::get_by_id)
                .put(publications::update)
                .delete(publications::delete),
        )
        .route(
            "/publications/{id}/files",
            get(publications::list_files).post(publications::create_file),
        )
}
