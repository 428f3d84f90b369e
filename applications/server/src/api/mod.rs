/// API route modules
pub mod albums;
pub mod health;
pub mod songs;

use crate::state::AppState;
use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use serde_json::Value;

/// Success envelope shared by every catalog endpoint
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn data(data: Value) -> Self {
        Self {
            status: "success",
            message: None,
            data: Some(data),
        }
    }

    pub fn message(message: &'static str) -> Self {
        Self {
            status: "success",
            message: Some(message),
            data: None,
        }
    }

    /// Envelope for a freshly created resource
    pub fn created(message: &'static str, data: Value) -> (StatusCode, Json<Self>) {
        (
            StatusCode::CREATED,
            Json(Self {
                status: "success",
                message: Some(message),
                data: Some(data),
            }),
        )
    }
}

/// Build the catalog router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/albums", get(albums::list_albums).post(albums::create_album))
        .route(
            "/albums/:id",
            get(albums::get_album)
                .put(albums::update_album)
                .delete(albums::delete_album),
        )
        .route("/songs", get(songs::list_songs).post(songs::create_song))
        .route(
            "/songs/:id",
            get(songs::get_song)
                .put(songs::update_song)
                .delete(songs::delete_song),
        )
        .with_state(state)
}
