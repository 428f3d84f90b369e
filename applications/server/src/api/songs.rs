/// Songs API routes
use super::Envelope;
use crate::{error::Result, state::AppState};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use openmusic_core::types::{SongFilter, SongId, SongPayload};
use serde_json::json;

/// POST /songs
pub async fn create_song(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<SongPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope>)> {
    let Json(payload) = payload?;
    let song_id = app_state.songs.create_song(payload).await?;

    Ok(Envelope::created("Song added", json!({ "songId": song_id })))
}

/// GET /songs?title=&performer=
pub async fn list_songs(
    State(app_state): State<AppState>,
    filter: std::result::Result<Query<SongFilter>, QueryRejection>,
) -> Result<Json<Envelope>> {
    let Query(filter) = filter?;
    let songs = app_state.songs.list_songs(filter).await?;
    Ok(Json(Envelope::data(json!({ "songs": songs }))))
}

/// GET /songs/:id
pub async fn get_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Envelope>> {
    let song = app_state.songs.get_song(&SongId::new(id)).await?;
    Ok(Json(Envelope::data(json!({ "song": song }))))
}

/// PUT /songs/:id
pub async fn update_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<SongPayload>, JsonRejection>,
) -> Result<Json<Envelope>> {
    let Json(payload) = payload?;
    app_state
        .songs
        .update_song(&SongId::new(id), payload)
        .await?;

    Ok(Json(Envelope::message("Song updated")))
}

/// DELETE /songs/:id
pub async fn delete_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Envelope>> {
    app_state.songs.delete_song(&SongId::new(id)).await?;
    Ok(Json(Envelope::message("Song deleted")))
}
