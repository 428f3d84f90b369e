//! Catalog domain types

mod album;
mod ids;
mod song;

pub use album::{Album, AlbumPayload};
pub use ids::{AlbumId, SongId};
pub use song::{Song, SongFilter, SongPayload, SongSummary};

use chrono::{SecondsFormat, Utc};

/// Current UTC time as ISO-8601 with millisecond precision
/// (`2023-10-08T09:00:00.000Z`).
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
