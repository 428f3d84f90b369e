/// Album service
use crate::{error::Result, validator};
use openmusic_core::{
    storage::AlbumRepository,
    types::{Album, AlbumId, AlbumPayload},
    CatalogError,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AlbumsService {
    repository: Arc<dyn AlbumRepository>,
}

impl AlbumsService {
    pub fn new(repository: Arc<dyn AlbumRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_albums(&self) -> Result<Vec<Album>> {
        Ok(self.repository.list().await?)
    }

    pub async fn create_album(&self, payload: AlbumPayload) -> Result<AlbumId> {
        validator::validate_album_payload(&payload)?;

        let id = self.repository.add(&payload).await?;
        tracing::info!(album_id = %id, name = %payload.name, "Album created");
        Ok(id)
    }

    pub async fn get_album(&self, id: &AlbumId) -> Result<Album> {
        Ok(self.repository.get_by_id(id).await?)
    }

    pub async fn update_album(&self, id: &AlbumId, payload: AlbumPayload) -> Result<()> {
        validator::validate_album_payload(&payload)?;
        self.ensure_exists(id).await?;

        Ok(self.repository.edit_by_id(id, &payload).await?)
    }

    /// Delete an album; its songs go with it
    pub async fn delete_album(&self, id: &AlbumId) -> Result<()> {
        self.ensure_exists(id).await?;

        self.repository.delete_by_id(id).await?;
        tracing::info!(album_id = %id, "Album deleted");
        Ok(())
    }

    async fn ensure_exists(&self, id: &AlbumId) -> Result<()> {
        if self.repository.exists(id).await? {
            Ok(())
        } else {
            Err(CatalogError::not_found("Album", id.as_str()).into())
        }
    }
}
