//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use room_catalog_api::app::build_app;
use room_catalog_api::config::Config;

/// Build the app with default configuration (room routes at the root).
pub fn build_test_app() -> Router {
    build_app(&Config::default())
}

/// Build the app with room routes mounted under `base_path`.
pub fn build_test_app_with_base_path(base_path: &str) -> Router {
    let config = Config {
        base_path: base_path.to_string(),
        ..Config::default()
    };
    build_app(&config)
}

/// Build the app from configuration parsed out of `vars`, as `main` does with
/// the process environment.
pub fn build_test_app_from_vars(vars: &[(&str, &str)]) -> Router {
    let config = Config::from_lookup(|key| {
        vars.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| (*value).to_string())
    })
    .unwrap();
    build_app(&config)
}

/// Send a request with an empty body and return status, headers and raw body.
pub async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, headers, body_bytes)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, _, body_bytes) = send(app, Method::GET, uri).await;
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
