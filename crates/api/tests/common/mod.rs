#![allow(dead_code)]

use std::str::FromStr;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tower::ServiceExt;

use todo_api::config::ServerConfig;
use todo_api::router::build_app_router;
use todo_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// No CORS origins are configured, so request origins are mirrored the same
/// way a default deployment does.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        cors_origins: Vec::new(),
        request_timeout_secs: 30,
    }
}

/// Open a fresh in-memory database with migrations applied.
///
/// One connection that never expires keeps the in-memory database alive for
/// the whole test.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("in-memory pool should open");
    todo_db::run_migrations(&pool)
        .await
        .expect("migrations should apply");
    pool
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request(Method::GET, uri)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body)).await
}

/// PUT with no body, as used by the toggle route.
pub async fn put(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request(Method::PUT, uri)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request(Method::DELETE, uri)).await
}

/// Send a request carrying a `Cookie` header.
pub async fn with_cookie(app: Router, method: Method, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Every `Set-Cookie` header value on the response.
pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(axum::http::header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_string)
        .collect()
}

/// Create a user through the API and return its id.
pub async fn create_user(app: Router, email: &str, password: &str) -> i64 {
    let response = post_json(
        app,
        "/users/",
        serde_json::json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await["id"]
        .as_i64()
        .expect("user id should be an integer")
}

/// Create an item through the API and return its id.
pub async fn create_item(app: Router, title: &str, owner_id: i64) -> i64 {
    let response = post_json(
        app,
        "/items/",
        serde_json::json!({ "title": title, "owner_id": owner_id }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await["id"]
        .as_i64()
        .expect("item id should be an integer")
}
