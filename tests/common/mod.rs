#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use book_shelf::{
    error::ErrorVerbosity, server::router, state::ApiState, store::memory::MemoryBookStore,
    store::BookStore,
};
use serde_json::Value;
use tower::ServiceExt;

pub fn app() -> Router {
    app_with_store(ErrorVerbosity::Full, Arc::new(MemoryBookStore::new()))
}

pub fn app_with_store(verbosity: ErrorVerbosity, store: Arc<dyn BookStore>) -> Router {
    router(ApiState::new(verbosity, store))
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    raw_request(method, uri, body.to_string())
}

pub fn raw_request(method: &str, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .expect("request")
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

/// Sends a request and reads the body as JSON, an empty body becomes [`Value::Null`].
pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.expect("response");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");

    let body = match bytes.is_empty() {
        true => Value::Null,
        false => serde_json::from_slice(&bytes).expect("JSON body"),
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
