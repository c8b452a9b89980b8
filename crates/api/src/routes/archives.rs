//! Route definitions for publication archives.

use axum::routing::get;
use axum::Router;

use crate::handlers::archives;
use crate::state::AppState;

/// Routes mounted at `/archives`.
///
/// ```text
/// GET    /                    -> list
/// POST   /                    -> create
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update
/// DELETE /{id}                -> delete
/// GET    /{id}/categories     -> list_categories
/// POST   /{id}/categories     -> create_category
/// GET    /{id}/publications   -> list_publications
/// GET    /{id}/view           -> view
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/archives", get(archives::list).post(archives::create))
        .route(
            "/archives/{id}",
            get(archives::get_by_id)
                .put(archives::update)
                .delete(archives::delete),
        )
        .route(
            "/archives/{id}/categories",
            get(archives::list_categories).post(archives::create_category),
        )
        .route("/archives/{id}/publications", get(archives::list_publications))
        .route("/archives/{id}/view", get(archives::view))
}
