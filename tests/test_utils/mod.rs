//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tempfile::TempDir;
use tower::util::ServiceExt;

use snuggles::api::AppState;
use snuggles::api::app;
use snuggles::core::AppConfig;
use snuggles::core::db::{async_db, initialize_db};

/// A router backed by a fresh database and session file. The storage
/// directory is removed when the returned `TempDir` is dropped so keep
/// it alive for the length of the test.
pub async fn test_app() -> (Router, TempDir) {
    test_app_with_chat_url("http://127.0.0.1:9/functions/v1/snugbot-chat").await
}

pub async fn test_app_with_chat_url(chat_url: &str) -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("db");
    std::fs::create_dir_all(&db_path).expect("Failed to create db directory");
    let db_path = db_path.to_str().unwrap().to_string();

    let db = async_db(&db_path)
        .await
        .expect("Failed to connect to async db");
    db.call(|conn| {
        initialize_db(conn).expect("Failed to migrate db");
        Ok(())
    })
    .await
    .unwrap();

    let app_config = AppConfig {
        storage_path: dir.path().display().to_string(),
        db_path,
        session_path: dir
            .path()
            .join("snuggles_auth.json")
            .display()
            .to_string(),
        chat_url: chat_url.to_string(),
        chat_api_key: String::from("test-api-key"),
        chat_timeout_secs: 5,
    };
    let app_state = AppState::new(db, app_config);
    (app(Arc::new(RwLock::new(app_state))), dir)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json<T: DeserializeOwned>(body: Body) -> T {
    let body = body_to_string(body).await;
    serde_json::from_str(&body).unwrap_or_else(|e| panic!("Invalid JSON {}: {}", body, e))
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: &Router, uri: &str, payload: Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}
