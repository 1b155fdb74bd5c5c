#![allow(dead_code)]

use std::sync::Arc;

use archive_api::config::ServerConfig;
use archive_api::router::build_app_router;
use archive_api::state::AppState;
use archive_core::types::RecordId;
use archive_db::models::video::{UpdateVideo, Video};
use archive_db::{DbError, DbResult, InMemoryVideoStore, UpdateOutcome, VideoStore};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_name: "archive_test".to_string(),
    }
}

/// Build the full application router over the given store.
///
/// Uses the same builder as `main.rs`, so tests exercise the production
/// middleware stack.
pub fn build_test_app(store: Arc<dyn VideoStore>) -> Router {
    build_app_router(AppState { store }, &test_config())
}

/// A fresh, empty in-memory store.
pub fn memory_store() -> Arc<InMemoryVideoStore> {
    Arc::new(InMemoryVideoStore::new())
}

/// A store whose every call fails as if the server were unreachable.
pub struct UnavailableStore;

fn unavailable() -> DbError {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
    DbError::Mongo(mongodb::error::Error::from(io))
}

#[async_trait]
impl VideoStore for UnavailableStore {
    async fn insert(&self, _video: &Video) -> DbResult<()> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: &RecordId) -> DbResult<Option<Video>> {
        Err(unavailable())
    }

    async fn list(&self, _limit: i64) -> DbResult<Vec<Video>> {
        Err(unavailable())
    }

    async fn update_fields(
        &self,
        _id: &RecordId,
        _changes: &UpdateVideo,
    ) -> DbResult<UpdateOutcome> {
        Err(unavailable())
    }

    async fn delete(&self, _id: &RecordId) -> DbResult<u64> {
        Err(unavailable())
    }

    async fn ping(&self) -> DbResult<()> {
        Err(unavailable())
    }
}

/// A valid create payload.
pub fn sample_video() -> serde_json::Value {
    serde_json::json!({
        "videoId": "abc",
        "channelId": "c1",
        "channelName": "Chan",
        "title": "T",
        "platform": "youtube",
    })
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Send a request with a raw (possibly invalid) body.
pub async fn send_raw(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a video through the API and return its `_id`.
pub async fn create_video(app: Router, body: serde_json::Value) -> String {
    let response = post_json(app, "/", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["_id"].as_str().unwrap().to_string()
}
