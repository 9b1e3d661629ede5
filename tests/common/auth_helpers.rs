//! Authentication test helpers
//!
//! Provides app construction over the in-memory store and small request
//! helpers for driving the router with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use gatehouse::auth::tokens::TokenKeys;
use gatehouse::routes::create_router;
use gatehouse::server::state::AppState;

use crate::common::store::MemoryUserStore;

/// Signing secret shared by every test app
///
/// Exposed so tests can mint tokens outside the app (expired ones, or
/// tokens signed with a *different* secret) that the app must judge.
pub const TEST_JWT_SECRET: &str = "test-secret";

/// A router wired to an in-memory store, plus handles to both
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryUserStore>,
    pub token_keys: Arc<TokenKeys>,
}

/// Build an app over a fresh in-memory store
pub fn test_app() -> TestApp {
    let store = Arc::new(MemoryUserStore::new());
    let token_keys = Arc::new(TokenKeys::new(TEST_JWT_SECRET, 3600));

    let state = AppState {
        store: store.clone(),
        token_keys: token_keys.clone(),
    };

    TestApp {
        router: create_router(state),
        store,
        token_keys,
    }
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Read a response body as JSON, `Null` if empty or not JSON
async fn body_json(body: Body) -> Value {
    let bytes = body.collect().await.expect("read body").to_bytes();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

/// POST a JSON body and return (status, body)
pub async fn post_json(router: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request");

    let response = router.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    (status, body_json(response.into_body()).await)
}

/// GET a path, optionally with a bearer token, and return (status, body)
pub async fn get_json(router: &Router, path: &str, token: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, auth_header(token));
    }
    let request = builder.body(Body::empty()).expect("build request");

    let response = router.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    (status, body_json(response.into_body()).await)
}
