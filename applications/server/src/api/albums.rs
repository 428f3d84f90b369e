/// Albums API routes
use super::Envelope;
use crate::{error::Result, state::AppState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use openmusic_core::types::{AlbumId, AlbumPayload};
use serde_json::json;

/// POST /albums
pub async fn create_album(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<AlbumPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope>)> {
    let Json(payload) = payload?;
    let album_id = app_state.albums.create_album(payload).await?;

    Ok(Envelope::created(
        "Album added",
        json!({ "albumId": album_id }),
    ))
}

/// GET /albums
/// Albums without their songs
pub async fn list_albums(State(app_state): State<AppState>) -> Result<Json<Envelope>> {
    let albums = app_state.albums.list_albums().await?;
    Ok(Json(Envelope::data(json!({ "albums": albums }))))
}

/// GET /albums/:id
/// Album with the songs stored under it
pub async fn get_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Envelope>> {
    let album = app_state.albums.get_album(&AlbumId::new(id)).await?;
    Ok(Json(Envelope::data(json!({ "album": album }))))
}

/// PUT /albums/:id
pub async fn update_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<AlbumPayload>, JsonRejection>,
) -> Result<Json<Envelope>> {
    let Json(payload) = payload?;
    app_state
        .albums
        .update_album(&AlbumId::new(id), payload)
        .await?;

    Ok(Json(Envelope::message("Album updated")))
}

/// DELETE /albums/:id
/// Removes the album and every song stored under it
pub async fn delete_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Envelope>> {
    app_state.albums.delete_album(&AlbumId::new(id)).await?;
    Ok(Json(Envelope::message("Album deleted")))
}
