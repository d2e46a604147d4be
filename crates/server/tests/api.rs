//! Router-level tests for the category surface, which is served from the
//! in-process registry and needs no live database. `/api/search` is covered
//! by the DB-gated tests in the search crate.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes::{build_router, AppState};

fn app() -> axum::Router {
    // Disconnected handle: these routes never touch the store
    let state = AppState { db: DatabaseConnection::default() };
    build_router(state, CorsLayer::very_permissive())
}

async fn get_json(path: &str) -> (StatusCode, Value) {
    let res = app()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn categories_list_has_envelope_and_total() {
    let (status, body) = get_json("/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let categories = body["data"]["categories"].as_array().unwrap();
    assert!(!categories.is_empty());
    assert_eq!(body["data"]["total"].as_u64().unwrap(), categories.len() as u64);
}

#[tokio::test]
async fn category_detail_resolves_slug_and_name() {
    let (status, body) = get_json("/api/categories/beauty-wellness").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["slug"], "beauty-wellness");
    assert!(body["data"]["subcategories"].as_array().unwrap().iter().any(|s| s == "Haircut"));

    // display name works too (URL-encoded)
    let (status, body) = get_json("/api/categories/HVAC").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["slug"], "hvac");
}

#[tokio::test]
async fn unknown_category_detail_is_404_envelope() {
    let (status, body) = get_json("/api/categories/dog-walking").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn category_suggestions_match_subcategories() {
    let (status, body) = get_json("/api/categories/search?q=haircut").await;
    assert_eq!(status, StatusCode::OK);
    let suggestions = body["data"]["suggestions"].as_array().unwrap();
    assert!(suggestions.iter().any(|s| s["subcategory"] == "Haircut"));
}

#[tokio::test]
async fn short_suggestion_query_is_empty_not_error() {
    let (status, body) = get_json("/api/categories/search?q=h").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total"], 0);
}

/// Repeated keys break query-string deserialization; the handler must coerce
/// to default filters and carry on to the store instead of returning a
/// plain-text 400. With the disconnected handle that surfaces as the 503
/// envelope.
#[tokio::test]
async fn duplicate_query_keys_coerce_instead_of_400() {
    let (status, body) = get_json("/api/search?page=1&page=2").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);

    let (status, body) = get_json("/api/categories/beauty-wellness/services?limit=10&limit=20").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
}
