/// Shared application state
use crate::services::{AlbumsService, SongsService};
use openmusic_core::storage::{AlbumRepository, SongRepository};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub albums: AlbumsService,
    pub songs: SongsService,
}

impl AppState {
    pub fn new(albums: Arc<dyn AlbumRepository>, songs: Arc<dyn SongRepository>) -> Self {
        Self {
            albums: AlbumsService::new(albums),
            songs: SongsService::new(songs),
        }
    }
}
