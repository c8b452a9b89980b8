//! Integration tests for error responses and the metadata endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: Unknown ids return 404 with the standard error envelope
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_ids_return_404(pool: PgPool) {
    for uri in [
        "/api/v1/archives/999999",
        "/api/v1/categories/999999",
        "/api/v1/publications/999999",
        "/api/v1/files/999999",
        "/api/v1/assets/999999",
        "/api/v1/archives/999999/view",
    ] {
        let app = build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri}");

        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND", "GET {uri}");
        assert!(json["error"].is_string(), "GET {uri}");
    }
}

// ---------------------------------------------------------------------------
// Test: Sort order dropdown options
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sort_order_options(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/meta/sort-orders").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let options = json["data"].as_array().unwrap();
    assert_eq!(options.len(), 4);
    assert_eq!(options[0]["value"], "order");
    assert_eq!(options[0]["label"], "Order");
    assert_eq!(options[2]["value"], "date-asc");
    assert_eq!(options[2]["label"], "Date Ascending");
}

// ---------------------------------------------------------------------------
// Test: Field metadata per entity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_field_metadata(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = get(app, "/api/v1/meta/fields/publication-file").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let fields = json["data"].as_array().unwrap();

    let name = fields.iter().find(|f| f["name"] == "name").unwrap();
    assert_eq!(name["required"], true);
    assert_eq!(name["kind"], "text");

    let upload = fields.iter().find(|f| f["name"] == "asset_id").unwrap();
    assert_eq!(upload["kind"], "upload");

    // Archive fields carry the dropdown options inline.
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/meta/fields/archive").await;
    let json = body_json(response).await;
    let fields = json["data"].as_array().unwrap();
    let sort = fields.iter().find(|f| f["name"] == "sort_order").unwrap();
    assert_eq!(sort["kind"], "dropdown");
    assert_eq!(sort["options"].as_array().unwrap().len(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_field_metadata_unknown_entity(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/meta/fields/widget").await;
    common::assert_error(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
}
