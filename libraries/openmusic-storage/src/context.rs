use crate::{albums, songs};
use async_trait::async_trait;
use openmusic_core::{
    error::Result,
    storage::{AlbumRepository, SongRepository},
    types::*,
};
use sqlx::SqlitePool;

/// Album repository backed by `SQLite`
#[derive(Debug, Clone)]
pub struct SqliteAlbumRepository {
    pool: SqlitePool,
}

impl SqliteAlbumRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumRepository for SqliteAlbumRepository {
    async fn add(&self, album: &AlbumPayload) -> Result<AlbumId> {
        albums::add(&self.pool, album).await
    }

    async fn list(&self) -> Result<Vec<Album>> {
        albums::get_all(&self.pool).await
    }

    async fn get_by_id(&self, id: &AlbumId) -> Result<Album> {
        albums::get_by_id(&self.pool, id).await
    }

    async fn exists(&self, id: &AlbumId) -> Result<bool> {
        albums::exists(&self.pool, id).await
    }

    async fn edit_by_id(&self, id: &AlbumId, album: &AlbumPayload) -> Result<()> {
        albums::update(&self.pool, id, album).await
    }

    async fn delete_by_id(&self, id: &AlbumId) -> Result<()> {
        albums::delete(&self.pool, id).await
    }
}

/// Song repository backed by `SQLite`
#[derive(Debug, Clone)]
pub struct SqliteSongRepository {
    pool: SqlitePool,
}

impl SqliteSongRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SongRepository for SqliteSongRepository {
    async fn add(&self, song: &SongPayload) -> Result<SongId> {
        songs::add(&self.pool, song).await
    }

    async fn list(&self, filter: &SongFilter) -> Result<Vec<Song>> {
        songs::search(&self.pool, filter).await
    }

    async fn get_by_id(&self, id: &SongId) -> Result<Song> {
        songs::get_by_id(&self.pool, id).await
    }

    async fn exists(&self, id: &SongId) -> Result<bool> {
        songs::exists(&self.pool, id).await
    }

    async fn edit_by_id(&self, id: &SongId, song: &SongPayload) -> Result<()> {
        songs::update(&self.pool, id, song).await
    }

    async fn delete_by_id(&self, id: &SongId) -> Result<()> {
        songs::delete(&self.pool, id).await
    }
}
