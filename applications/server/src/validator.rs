//! Payload validation
//!
//! Shape errors (missing fields, wrong JSON types) are already rejected by
//! the JSON extractor; these checks cover what the type system cannot
//! express. Both run before any storage call.

use crate::error::Result;
use openmusic_core::{
    types::{AlbumPayload, SongFilter, SongPayload},
    CatalogError,
};

/// Check an album payload
pub fn validate_album_payload(payload: &AlbumPayload) -> Result<()> {
    require_text("name", &payload.name)
}

/// Check a song payload and normalize it.
///
/// An empty `albumId` is treated as "no album".
pub fn validate_song_payload(mut payload: SongPayload) -> Result<SongPayload> {
    require_text("title", &payload.title)?;
    require_text("genre", &payload.genre)?;
    require_text("performer", &payload.performer)?;

    if let Some(duration) = payload.duration {
        if duration < 0 {
            return Err(CatalogError::validation("\"duration\" must not be negative").into());
        }
    }

    if payload.album_id.as_ref().is_some_and(|id| id.as_str().trim().is_empty()) {
        payload.album_id = None;
    }

    Ok(payload)
}

/// Normalize a search filter: blank criteria are dropped
pub fn normalize_song_filter(filter: SongFilter) -> SongFilter {
    SongFilter {
        title: filter.title.filter(|t| !t.is_empty()),
        performer: filter.performer.filter(|p| !p.is_empty()),
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(
            CatalogError::validation(format!("\"{field}\" is not allowed to be empty")).into(),
        );
    }
    Ok(())
}
