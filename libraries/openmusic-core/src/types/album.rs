//! Album types

use super::{AlbumId, SongSummary};
use serde::{Deserialize, Serialize};

/// An album
///
/// `songs` is derived from the songs table and is only populated when the
/// album is fetched by id; list views leave it out entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub songs: Option<Vec<SongSummary>>,
    pub created_at: String,
    pub updated_at: String,
}

/// Data for creating or replacing an album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumPayload {
    pub name: String,
    pub year: i32,
}

impl AlbumPayload {
    /// Build a payload
    pub fn new(name: impl Into<String>, year: i32) -> Self {
        Self {
            name: name.into(),
            year,
        }
    }
}
