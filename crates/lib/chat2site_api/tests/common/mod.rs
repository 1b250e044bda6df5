//! Shared helpers for router integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chat2site_api::{AppState, config::ApiConfig};
use chat2site_core::auth::jwt::generate_access_token;
use chat2site_core::matcher::Matcher;
use chat2site_core::store::MemoryProjectStore;
use tower::ServiceExt;
use uuid::Uuid;

pub const SECRET: &str = "test-secret";

pub fn app() -> Router {
    chat2site_api::router(AppState {
        store: Arc::new(MemoryProjectStore::new()),
        matcher: Matcher::builtin(),
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            pg_connection_url: String::new(),
            jwt_secret: SECRET.into(),
            jwt_audience: None,
            catalog_path: None,
        },
    })
}

/// Bearer token for a fresh user.
pub fn token() -> String {
    token_for(&Uuid::now_v7())
}

pub fn token_for(user_id: &Uuid) -> String {
    generate_access_token(user_id, Some("owner@example.com"), SECRET.as_bytes())
        .expect("sign token")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("parse JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("utf-8 body")
    }
}

/// Send one request through a clone of `app`.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .expect("request");
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}
