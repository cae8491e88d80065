//! Integration tests for the Axum routes.
//!
//! Each test runs against a fresh in-memory database.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use todo_axum::{AxumContext, CorsConfig, create_router};
use todo_core::{Repos, TodoService};
use todo_db::{build_repos, setup_test_database};

const FRONTEND: &str = "http://frontend.test";

async fn test_app() -> Router {
    let repos: Repos = build_repos(setup_test_database().await.unwrap());
    let ctx = AxumContext::new(TodoService::from_repos(&repos), FRONTEND);
    create_router(ctx, &CorsConfig::AllowAll)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

async fn list(app: &Router) -> Value {
    let (status, _, body) = send(app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = test_app().await;
    let (status, _, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn list_starts_empty() {
    let app = test_app().await;
    assert_eq!(list(&app).await, json!([]));
}

#[tokio::test]
async fn create_redirects_and_appears_in_list() {
    let app = test_app().await;

    let (status, headers, _) = send(&app, post_form("/create", "description=buy+milk")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers[header::LOCATION], FRONTEND);

    assert_eq!(
        list(&app).await,
        json!([{"id": 1, "description": "buy milk", "done": false}])
    );
}

#[tokio::test]
async fn create_rejects_blank_description() {
    let app = test_app().await;

    let (status, _, body) = send(&app, post_form("/create", "description=++")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["status"], 400);
    assert_eq!(list(&app).await, json!([]));
}

#[tokio::test]
async fn create_without_description_field_is_json_400() {
    let app = test_app().await;

    let (status, headers, body) = send(&app, post_form("/create", "")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");

    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["status"], 400);
    assert!(error["error"].as_str().unwrap().contains("description"));
}

#[tokio::test]
async fn non_numeric_ids_are_json_400() {
    let app = test_app().await;

    for request in [get("/read/abc"), post_form("/delete/abc", "")] {
        let (status, headers, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");

        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["status"], 400);
    }
}

#[tokio::test]
async fn read_returns_single_todo_or_404() {
    let app = test_app().await;
    send(&app, post_form("/create", "description=first")).await;

    let (status, _, body) = send(&app, get("/read/1")).await;
    assert_eq!(status, StatusCode::OK);
    let todo: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(todo, json!({"id": 1, "description": "first", "done": false}));

    let (status, _, body) = send(&app, get("/read/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["status"], 404);
}

#[tokio::test]
async fn update_via_query_marks_done() {
    let app = test_app().await;
    send(&app, post_form("/create", "description=draft")).await;

    let (status, headers, _) =
        send(&app, get("/update?id=1&description=final&done=true")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers[header::LOCATION], FRONTEND);

    assert_eq!(
        list(&app).await,
        json!([{"id": 1, "description": "final", "done": true}])
    );
}

#[tokio::test]
async fn update_unknown_id_is_404() {
    let app = test_app().await;

    let (status, _, _) = send(&app, get("/update?id=7&description=nope&done=false")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_and_second_delete_is_404() {
    let app = test_app().await;
    send(&app, post_form("/create", "description=temporary")).await;

    let (status, _, _) = send(&app, post_form("/delete/1", "")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(list(&app).await, json!([]));

    let (status, _, _) = send(&app, post_form("/delete/1", "")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let app = test_app().await;

    let request = Request::builder()
        .uri("/")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let (status, headers, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
