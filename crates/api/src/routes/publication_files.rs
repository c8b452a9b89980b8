//! Route definitions for publication files.

use axum::routing::get;
use axum::Router;

use crate::handlers::publication_files;
use crate::state::AppState;

/// Routes mounted at `/files`.
///
/// ```text
/// GET    /{id}   -> get_by_id (row plus derived info)
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/files/{id}",
        get(publication_files::get_by_id)
            .put(publication_files::update)
            .delete(publication_files::delete),
    )
}
