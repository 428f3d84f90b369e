//! Repository traits for the album/song catalog
//!
//! Implementations own a storage handle passed in at construction time;
//! nothing here reaches for global state.

use crate::error::Result;
use crate::types::{Album, AlbumId, AlbumPayload, Song, SongFilter, SongId, SongPayload};
use async_trait::async_trait;

/// Album persistence
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// Insert a new album and return its generated id.
    ///
    /// A name collision or an insert that yields no row is an
    /// `Invariant` error.
    async fn add(&self, album: &AlbumPayload) -> Result<AlbumId>;

    /// All albums, without nested songs
    async fn list(&self) -> Result<Vec<Album>>;

    /// One album with its song summaries
    async fn get_by_id(&self, id: &AlbumId) -> Result<Album>;

    /// Existence probe
    async fn exists(&self, id: &AlbumId) -> Result<bool>;

    /// Replace name and year
    async fn edit_by_id(&self, id: &AlbumId, album: &AlbumPayload) -> Result<()>;

    /// Delete the album together with every song (and join row) that
    /// references it
    async fn delete_by_id(&self, id: &AlbumId) -> Result<()>;
}

/// Song persistence
#[async_trait]
pub trait SongRepository: Send + Sync {
    /// Insert a new song and return its generated id.
    ///
    /// When the payload names an album, the album must exist; its current
    /// name is stored alongside the song.
    async fn add(&self, song: &SongPayload) -> Result<SongId>;

    /// Songs matching the filter (all songs for an empty filter)
    async fn list(&self, filter: &SongFilter) -> Result<Vec<Song>>;

    /// One song
    async fn get_by_id(&self, id: &SongId) -> Result<Song>;

    /// Existence probe
    async fn exists(&self, id: &SongId) -> Result<bool>;

    /// Replace every field of the song
    async fn edit_by_id(&self, id: &SongId, song: &SongPayload) -> Result<()>;

    /// Delete the song and its join rows
    async fn delete_by_id(&self, id: &SongId) -> Result<()>;
}
