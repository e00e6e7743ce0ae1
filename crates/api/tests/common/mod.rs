#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use reel_api::config::ServerConfig;
use reel_api::router::build_app_router;
use reel_api::state::AppState;
use reel_db::MovieStore;
use tower::ServiceExt;

/// A seeded movie with genres Action, Crime and Drama.
pub const DARK_KNIGHT_ID: &str = "c8a7d63f-3b04-44d3-9d95-8782fd7dcfaf";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses the default origin allow-list and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    }
}

/// Build the full application router over a freshly seeded store.
///
/// Goes through `build_app_router`, so integration tests exercise the same
/// middleware stack (origin gate, CORS, request ID, timeout, tracing, panic
/// recovery) that production uses. The returned store handle shares state
/// with the router.
pub fn build_test_app() -> (Router, MovieStore) {
    let store = reel_db::create_store(None).expect("embedded seed should load");
    let state = AppState {
        store: store.clone(),
        config: Arc::new(test_config()),
    };
    (build_app_router(state), store)
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_with_origin(app: Router, uri: &str, origin: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header("Origin", origin)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::POST, uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::PATCH, uri, body).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
