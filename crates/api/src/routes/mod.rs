pub mod archives;
pub mod assets;
pub mod categories;
pub mod health;
pub mod meta;
pub mod publication_files;
pub mod publications;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /archives                          list, create
/// /archives/{id}                     get, update, delete
/// /archives/{id}/categories          list, create
/// /archives/{id}/publications        all publications, archive-sorted
/// /archives/{id}/view                visible-category derived view
///
/// /categories/{id}                   get, update, delete
/// /categories/{id}/publications      list (archive-sorted), create
///
/// /publications/{id}                 get, update, delete
/// /publications/{id}/files           list (?include_disabled), create
///
/// /files/{id}                        get (with derived info), update, delete
///
/// /assets                            register uploaded-asset record
/// /assets/{id}                       get, delete
///
/// /meta/sort-orders                  sort order dropdown options
/// /meta/fields/{entity}              editing-form field metadata
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(archives::router())
        .merge(categories::router())
        .merge(publications::router())
        .merge(publication_files::router())
        .merge(assets::router())
        .merge(meta::router())
}
