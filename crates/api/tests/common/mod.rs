#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::{Datelike, Local, NaiveDate};
use http_body_util::BodyExt;
use tower::ServiceExt;

use regform_api::config::ServerConfig;
use regform_api::router::build_app_router;
use regform_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the application router through the same builder `main.rs` uses.
pub fn build_test_app() -> Router {
    build_app_with_config(test_config())
}

pub fn build_app_with_config(config: ServerConfig) -> Router {
    let state = AppState {
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A `YYYY-MM-DD` birth date giving exactly `age` today.
pub fn dob_for_age(age: i32) -> String {
    let today = Local::now().date_naive();
    let year = today.year() - age;
    // Feb 29 has no counterpart in most years; Jan 1 is always reached.
    let birth = NaiveDate::from_ymd_opt(year, today.month(), today.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).unwrap());
    birth.format("%Y-%m-%d").to_string()
}

/// A complete, valid registration payload.
pub fn valid_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "khan",
        "dob": dob_for_age(25),
        "email": "x@y.com",
        "password": "secret1",
        "confirmPassword": "secret1"
    })
}
