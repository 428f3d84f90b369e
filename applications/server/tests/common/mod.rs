//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use openmusic_server::{api, state::AppState};
use openmusic_storage::{SqliteAlbumRepository, SqliteSongRepository};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router over a throwaway SQLite file
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}", temp_dir.path().join("catalog.db").display());

        let pool = openmusic_storage::create_pool(&db_url, 5).await.unwrap();
        openmusic_storage::run_migrations(&pool).await.unwrap();

        let state = AppState::new(
            Arc::new(SqliteAlbumRepository::new(pool.clone())),
            Arc::new(SqliteSongRepository::new(pool.clone())),
        );

        Self {
            router: api::router(state),
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Send a request and decode the JSON body
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Create an album, returning its id
    pub async fn create_album(&self, name: &str, year: i32) -> String {
        let (status, body) = self
            .post("/albums", serde_json::json!({ "name": name, "year": year }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"]["albumId"].as_str().unwrap().to_string()
    }

    /// Create a song, returning its id
    pub async fn create_song(&self, body: Value) -> String {
        let (status, response) = self.post("/songs", body).await;
        assert_eq!(status, StatusCode::CREATED, "{response}");
        response["data"]["songId"].as_str().unwrap().to_string()
    }
}

pub mod fixtures {
    use serde_json::{json, Value};

    pub fn song(title: &str, performer: &str) -> Value {
        json!({
            "title": title,
            "year": 1982,
            "genre": "pop",
            "performer": performer,
        })
    }

    pub fn song_on_album(title: &str, performer: &str, album_id: &str) -> Value {
        let mut song = song(title, performer);
        song["albumId"] = json!(album_id);
        song
    }
}
