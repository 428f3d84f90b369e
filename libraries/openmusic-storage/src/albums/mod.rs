use crate::mapper;
use openmusic_core::{
    error::{CatalogError, Result},
    types::{timestamp_now, Album, AlbumId, AlbumPayload},
};
use sqlx::{Row, Sqlite, SqlitePool};

const ENTITY: &str = "Album";

/// Insert a new album; returns the generated id
pub async fn add(pool: &SqlitePool, album: &AlbumPayload) -> Result<AlbumId> {
    let id = AlbumId::generate();
    let created_at = timestamp_now();

    let row = sqlx::query(
        "INSERT INTO albums (id, name, year, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id",
    )
    .bind(&id)
    .bind(&album.name)
    .bind(album.year)
    .bind(&created_at)
    .bind(&created_at)
    .fetch_optional(pool)
    .await
    .map_err(|err| match CatalogError::from(err) {
        CatalogError::Invariant(_) => add_failed(&album.name),
        other => other,
    })?;

    let Some(row) = row else {
        return Err(add_failed(&album.name));
    };

    let id: AlbumId = row.try_get("id")?;
    tracing::debug!(album_id = %id, name = %album.name, "Album added");
    Ok(id)
}

/// All albums (no nested songs)
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Album>> {
    let rows = sqlx::query(
        "SELECT id, name, year, created_at, updated_at
         FROM albums
         ORDER BY created_at, id",
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| mapper::album_from_row(row).map_err(Into::into))
        .collect()
}

/// One album with summaries of the songs that reference it
pub async fn get_by_id(pool: &SqlitePool, id: &AlbumId) -> Result<Album> {
    let rows = sqlx::query(
        "SELECT a.id, a.name, a.year, a.created_at, a.updated_at,
                s.id AS song_id, s.title AS song_title, s.performer AS song_performer
         FROM albums a
         LEFT JOIN songs s ON s.album_id = a.id
         WHERE a.id = ?
         ORDER BY s.created_at, s.id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    mapper::album_with_songs_from_rows(&rows)?
        .ok_or_else(|| CatalogError::not_found(ENTITY, id.as_str()))
}

/// Whether an album with this id exists
pub async fn exists(pool: &SqlitePool, id: &AlbumId) -> Result<bool> {
    let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM albums WHERE id = ?)")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(found)
}

/// Current name of an album.
///
/// Takes any executor so song writes can resolve the name inside their own
/// transaction.
pub async fn name_of<'e, E>(executor: E, id: &AlbumId) -> Result<String>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query_scalar::<_, String>("SELECT name FROM albums WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or_else(|| CatalogError::not_found(ENTITY, id.as_str()))
}

/// Replace name and year.
///
/// Songs keep the album name they were written with; a rename is not
/// propagated to `songs.album_name`.
pub async fn update(pool: &SqlitePool, id: &AlbumId, album: &AlbumPayload) -> Result<()> {
    let result = sqlx::query(
        "UPDATE albums
         SET name = ?, year = ?, updated_at = ?
         WHERE id = ?",
    )
    .bind(&album.name)
    .bind(album.year)
    .bind(timestamp_now())
    .bind(id)
    .execute(pool)
    .await
    .map_err(|err| match CatalogError::from(err) {
        CatalogError::Invariant(_) => {
            CatalogError::invariant(format!("Album name already in use: {}", album.name))
        }
        other => other,
    })?;

    if result.rows_affected() == 0 {
        return Err(CatalogError::not_found(ENTITY, id.as_str()));
    }

    tracing::debug!(album_id = %id, "Album updated");
    Ok(())
}

/// Delete an album and everything that references it.
///
/// Join rows go first, then the album's songs, then the album itself, all
/// in one transaction. If the album row is missing the transaction is
/// rolled back and nothing is removed.
pub async fn delete(pool: &SqlitePool, id: &AlbumId) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "DELETE FROM album_songs
         WHERE album_id = ?
            OR song_id IN (SELECT id FROM songs WHERE album_id = ?)",
    )
    .bind(id)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    let songs_removed = sqlx::query("DELETE FROM songs WHERE album_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let albums_removed = sqlx::query("DELETE FROM albums WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if albums_removed == 0 {
        tx.rollback().await?;
        return Err(CatalogError::not_found(ENTITY, id.as_str()));
    }

    tx.commit().await?;

    tracing::debug!(album_id = %id, songs_removed, "Album deleted");
    Ok(())
}

fn add_failed(name: &str) -> CatalogError {
    CatalogError::invariant(format!("Failed to add album: {name}"))
}
