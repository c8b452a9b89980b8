//! Route definitions for editing-form metadata.

use axum::routing::get;
use axum::Router;

use crate::handlers::meta;
use crate::state::AppState;

/// Routes mounted at `/meta`.
///
/// ```text
/// GET /sort-orders        -> sort_orders
/// GET /fields/{entity}    -> fields
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/meta/sort-orders", get(meta::sort_orders))
        .route("/meta/fields/{entity}", get(meta::fields))
}
