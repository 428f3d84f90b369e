//! Song types

use super::{AlbumId, SongId};
use serde::{Deserialize, Serialize};

/// A song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,
    pub duration: Option<i32>,
    /// Weak reference; the album may have been renamed since
    pub album_id: Option<AlbumId>,
    /// Album name as it was when the song was written (denormalized)
    pub album_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Song as nested inside an album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongSummary {
    pub id: SongId,
    pub title: String,
    pub performer: String,
}

/// Data for creating or replacing a song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongPayload {
    pub title: String,
    pub year: i32,
    pub genre: String,
    pub performer: String,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub album_id: Option<AlbumId>,
}

impl SongPayload {
    /// Build a payload without duration or album
    pub fn new(
        title: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        performer: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            genre: genre.into(),
            performer: performer.into(),
            duration: None,
            album_id: None,
        }
    }

    /// Set the duration in seconds
    #[must_use]
    pub fn with_duration(mut self, duration: i32) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Attach the song to an album
    #[must_use]
    pub fn with_album(mut self, album_id: AlbumId) -> Self {
        self.album_id = Some(album_id);
        self
    }
}

/// Song search filter.
///
/// Both fields are case-insensitive substring matches; when both are set a
/// song has to match both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongFilter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub performer: Option<String>,
}

impl SongFilter {
    /// Filter on title only
    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            performer: None,
        }
    }

    /// Filter on performer only
    pub fn by_performer(performer: impl Into<String>) -> Self {
        Self {
            title: None,
            performer: Some(performer.into()),
        }
    }
}
