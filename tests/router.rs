mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use urlhash::routes::app_router;

fn shorten_request(uri: &str, full_url: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "full_url": full_url }).to_string()))
        .unwrap()
}

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[sqlx::test]
async fn test_full_lifecycle_under_prefix(pool: PgPool) {
    let state = common::create_test_state(pool, true).await;
    let app = app_router(state, "/api/v1/urls");

    let response = app
        .clone()
        .oneshot(shorten_request(
            "/api/v1/urls/shorten/",
            "https://example.com/a",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["short_url"], "http://short.test/Lc4KTFBE");

    let response = app
        .clone()
        .oneshot(request("GET", "/api/v1/urls/http://short.test/Lc4KTFBE/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com/a"
    );

    let response = app
        .clone()
        .oneshot(request("DELETE", "/api/v1/urls/http://short.test/Lc4KTFBE/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(request("GET", "/api/v1/urls/http://short.test/Lc4KTFBE/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_trailing_slash_is_optional(pool: PgPool) {
    let state = common::create_test_state(pool, true).await;
    let app = app_router(state, "/api/v1/urls");

    let response = app
        .oneshot(shorten_request("/api/v1/urls/shorten", "https://example.com"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test]
async fn test_custom_prefix(pool: PgPool) {
    let state = common::create_test_state(pool, true).await;
    let app = app_router(state, "/links/");

    let response = app
        .clone()
        .oneshot(shorten_request("/links/shorten/", "https://example.com"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(shorten_request("/api/v1/urls/shorten/", "https://example.com"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_health_is_outside_prefix(pool: PgPool) {
    let state = common::create_test_state(pool, true).await;
    let app = app_router(state, "/api/v1/urls");

    let response = app.oneshot(request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

async fn shorten(app: &axum::Router, full_url: &str) -> String {
    let response = app
        .clone()
        .oneshot(shorten_request("/api/v1/urls/shorten/", full_url))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    json["short_url"].as_str().unwrap().to_string()
}

/// Redirects through both the stored and the bare form, deletes, then
/// checks the mapping is gone.
async fn assert_lifecycle(app: &axum::Router, full_url: &str, code: &str) {
    let short_url = shorten(app, full_url).await;
    assert_eq!(short_url, format!("{}{}", common::DOMAIN, code));

    for uri in [
        format!("/api/v1/urls/{short_url}/"),
        format!("/api/v1/urls/{code}/"),
    ] {
        let response = app.clone().oneshot(request("GET", &uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "GET {uri}");
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), full_url);
    }

    let uri = format!("/api/v1/urls/{short_url}/");
    let response = app.clone().oneshot(request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn test_lifecycle_code_with_inner_slash(pool: PgPool) {
    let state = common::create_test_state(pool, true).await;
    let app = app_router(state, "/api/v1/urls");

    assert_lifecycle(&app, "https://example.com/b", "1/5WizGu").await;
}

#[sqlx::test]
async fn test_lifecycle_code_ending_in_slash(pool: PgPool) {
    let state = common::create_test_state(pool, true).await;
    let app = app_router(state, "/api/v1/urls");

    assert_lifecycle(&app, "https://example.com/2", "EFNP1MV/").await;
}

#[sqlx::test]
async fn test_lifecycle_code_with_plus(pool: PgPool) {
    let state = common::create_test_state(pool, true).await;
    let app = app_router(state, "/api/v1/urls");

    assert_lifecycle(&app, "https://example.com/0", "UxJmf4+P").await;
}

#[sqlx::test]
async fn test_code_ending_in_slash_needs_terminal_slash(pool: PgPool) {
    let state = common::create_test_state(pool, true).await;
    let app = app_router(state, "/api/v1/urls");
    shorten(&app, "https://example.com/2").await;

    let response = app
        .oneshot(request("GET", "/api/v1/urls/EFNP1MV/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

async fn assert_unprocessable_body(app: axum::Router, request: Request<Body>) {
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["detail"].is_string());
}

#[sqlx::test]
async fn test_malformed_json_is_unprocessable(pool: PgPool) {
    let state = common::create_test_state(pool.clone(), true).await;
    let app = app_router(state, "/api/v1/urls");

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/urls/shorten/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"full_url": "#))
        .unwrap();

    assert_unprocessable_body(app, request).await;
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_wrong_body_shape_is_unprocessable(pool: PgPool) {
    let state = common::create_test_state(pool, true).await;
    let app = app_router(state, "/api/v1/urls");

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/urls/shorten/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "url": "https://example.com" }).to_string()))
        .unwrap();

    assert_unprocessable_body(app, request).await;
}

#[sqlx::test]
async fn test_missing_content_type_is_unprocessable(pool: PgPool) {
    let state = common::create_test_state(pool.clone(), true).await;
    let app = app_router(state, "/api/v1/urls");

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/urls/shorten/")
        .body(Body::from(
            json!({ "full_url": "https://example.com" }).to_string(),
        ))
        .unwrap();

    assert_unprocessable_body(app, request).await;
    assert_eq!(common::count_urls(&pool).await, 0);
}
