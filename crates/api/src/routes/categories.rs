//! Route definitions for publication categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /{id}                -> get_by_id
/// PUT    /{id}                -> update
/// DELETE /{id}                -> delete
/// GET    /{id}/publications   -> list_publications
/// POST   /{id}/publications   -> create_publication
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/categories/{id}",
            get(categories::get_by_id)
                .put(categories::update)
                .delete(categories::delete),
        )
        .route(
            "/categories/{id}/publications",
            get(categories::list_publications).post(categories::create_publication),
        )
}
