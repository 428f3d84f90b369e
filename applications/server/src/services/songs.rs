/// Song service
use crate::{error::Result, validator};
use openmusic_core::{
    storage::SongRepository,
    types::{Song, SongFilter, SongId, SongPayload},
    CatalogError,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct SongsService {
    repository: Arc<dyn SongRepository>,
}

impl SongsService {
    pub fn new(repository: Arc<dyn SongRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_songs(&self, filter: SongFilter) -> Result<Vec<Song>> {
        let filter = validator::normalize_song_filter(filter);
        Ok(self.repository.list(&filter).await?)
    }

    /// Create a song; a dangling `albumId` is reported as not found
    pub async fn create_song(&self, payload: SongPayload) -> Result<SongId> {
        let payload = validator::validate_song_payload(payload)?;

        let id = self.repository.add(&payload).await?;
        tracing::info!(song_id = %id, album_id = ?payload.album_id, "Song created");
        Ok(id)
    }

    pub async fn get_song(&self, id: &SongId) -> Result<Song> {
        Ok(self.repository.get_by_id(id).await?)
    }

    pub async fn update_song(&self, id: &SongId, payload: SongPayload) -> Result<()> {
        let payload = validator::validate_song_payload(payload)?;
        self.ensure_exists(id).await?;

        Ok(self.repository.edit_by_id(id, &payload).await?)
    }

    pub async fn delete_song(&self, id: &SongId) -> Result<()> {
        self.ensure_exists(id).await?;

        self.repository.delete_by_id(id).await?;
        tracing::info!(song_id = %id, "Song deleted");
        Ok(())
    }

    async fn ensure_exists(&self, id: &SongId) -> Result<()> {
        if self.repository.exists(id).await? {
            Ok(())
        } else {
            Err(CatalogError::not_found("Song", id.as_str()).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServerError;
    use async_trait::async_trait;
    use mockall::{mock, predicate::eq};
    use openmusic_core::error::Result as CatalogResult;
    use openmusic_core::types::AlbumId;

    mock! {
        pub Songs {}

        #[async_trait]
        impl SongRepository for Songs {
            async fn add(&self, song: &SongPayload) -> CatalogResult<SongId>;
            async fn list(&self, filter: &SongFilter) -> CatalogResult<Vec<Song>>;
            async fn get_by_id(&self, id: &SongId) -> CatalogResult<Song>;
            async fn exists(&self, id: &SongId) -> CatalogResult<bool>;
            async fn edit_by_id(&self, id: &SongId, song: &SongPayload) -> CatalogResult<()>;
            async fn delete_by_id(&self, id: &SongId) -> CatalogResult<()>;
        }
    }

    fn service(mock: MockSongs) -> SongsService {
        SongsService::new(Arc::new(mock))
    }

    fn payload() -> SongPayload {
        SongPayload::new("Beat It", 1982, "pop", "MJ")
    }

    #[tokio::test]
    async fn create_passes_normalized_payload() {
        let mut mock = MockSongs::new();
        mock.expect_add()
            .withf(|song| song.album_id.is_none() && song.title == "Beat It")
            .times(1)
            .returning(|_| Ok(SongId::new("song-00000000001")));

        let id = service(mock)
            .create_song(payload().with_album(AlbumId::new("")))
            .await
            .unwrap();

        assert_eq!(id, SongId::new("song-00000000001"));
    }

    #[tokio::test]
    async fn dangling_album_reference_is_not_found() {
        let mut mock = MockSongs::new();
        mock.expect_add()
            .returning(|_| Err(CatalogError::not_found("Album", "ghost")));

        let err = service(mock)
            .create_song(payload().with_album(AlbumId::new("ghost")))
            .await
            .unwrap_err();

        assert!(matches!(err, ServerError::NotFound(ref m) if m == "Album not found: ghost"));
    }

    #[tokio::test]
    async fn create_rejects_invalid_payload_before_storage() {
        let mut mock = MockSongs::new();
        mock.expect_add().never();

        let err = service(mock)
            .create_song(SongPayload::new("Beat It", 1982, "", "MJ"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServerError::Validation(_)));
    }

    #[tokio::test]
    async fn list_drops_blank_criteria() {
        let mut mock = MockSongs::new();
        mock.expect_list()
            .with(eq(SongFilter::by_performer("adele")))
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let filter = SongFilter {
            title: Some(String::new()),
            performer: Some("adele".to_string()),
        };
        let songs = service(mock).list_songs(filter).await.unwrap();

        assert!(songs.is_empty());
    }

    #[tokio::test]
    async fn update_of_missing_song_never_touches_storage() {
        let mut mock = MockSongs::new();
        mock.expect_exists().times(1).returning(|_| Ok(false));
        mock.expect_edit_by_id().never();

        let err = service(mock)
            .update_song(&SongId::new("missing"), payload())
            .await
            .unwrap_err();

        assert!(matches!(err, ServerError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_existing_song() {
        let id = SongId::new("song-1");
        let mut mock = MockSongs::new();
        mock.expect_exists().returning(|_| Ok(true));
        mock.expect_delete_by_id()
            .with(eq(id.clone()))
            .times(1)
            .returning(|_| Ok(()));

        service(mock).delete_song(&id).await.unwrap();
    }

    #[tokio::test]
    async fn existence_probe_failure_is_internal() {
        let mut mock = MockSongs::new();
        mock.expect_exists()
            .returning(|_| Err(CatalogError::database("unable to open database file")));
        mock.expect_delete_by_id().never();

        let err = service(mock)
            .delete_song(&SongId::new("song-1"))
            .await
            .unwrap_err();

        assert!(matches!(err, ServerError::Internal(_)));
    }
}
