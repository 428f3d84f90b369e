use crate::{albums, mapper};
use openmusic_core::{
    error::{CatalogError, Result},
    types::{timestamp_now, AlbumId, Song, SongFilter, SongId, SongPayload},
};
use sqlx::{QueryBuilder, Row, Sqlite, SqliteConnection, SqlitePool};

const ENTITY: &str = "Song";

/// Insert a new song; returns the generated id.
///
/// When the payload carries an album id, the album's name is looked up in
/// the same transaction as the insert. A missing album aborts the write
/// with `NotFound`, so no song ever starts out with a dangling reference.
pub async fn add(pool: &SqlitePool, song: &SongPayload) -> Result<SongId> {
    let id = SongId::generate();
    let created_at = timestamp_now();

    let mut tx = pool.begin().await?;
    let album_name = resolve_album_name(&mut *tx, song.album_id.as_ref()).await?;

    let row = sqlx::query(
        "INSERT INTO songs (
            id, title, year, genre, performer, duration,
            album_id, album_name, created_at, updated_at,
            title_folded, performer_folded
         ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
         RETURNING id",
    )
    .bind(&id)
    .bind(&song.title)
    .bind(song.year)
    .bind(&song.genre)
    .bind(&song.performer)
    .bind(song.duration)
    .bind(song.album_id.as_ref())
    .bind(album_name.as_deref())
    .bind(&created_at)
    .bind(&created_at)
    .bind(song.title.to_lowercase())
    .bind(song.performer.to_lowercase())
    .fetch_optional(&mut *tx)
    .await
    .map_err(|err| match CatalogError::from(err) {
        CatalogError::Invariant(_) => add_failed(&song.title),
        other => other,
    })?;

    let Some(row) = row else {
        return Err(add_failed(&song.title));
    };
    let id: SongId = row.try_get("id")?;

    tx.commit().await?;

    tracing::debug!(song_id = %id, album_id = ?song.album_id, "Song added");
    Ok(id)
}

/// Songs matching `filter`; an empty filter returns every song.
///
/// Title and performer are matched as substrings, ignoring case. Matching
/// runs against the lowercased `*_folded` columns because `SQLite` `LIKE`
/// only folds ASCII. `%` and `_` in the search text match literally.
pub async fn search(pool: &SqlitePool, filter: &SongFilter) -> Result<Vec<Song>> {
    let mut query =
        QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM songs", mapper::SONG_COLUMNS));

    let mut separator = " WHERE ";
    if let Some(title) = filter.title.as_deref() {
        query
            .push(separator)
            .push("title_folded LIKE ")
            .push_bind(like_pattern(&title.to_lowercase()))
            .push(" ESCAPE '\\'");
        separator = " AND ";
    }
    if let Some(performer) = filter.performer.as_deref() {
        query
            .push(separator)
            .push("performer_folded LIKE ")
            .push_bind(like_pattern(&performer.to_lowercase()))
            .push(" ESCAPE '\\'");
    }
    query.push(" ORDER BY created_at, id");

    let rows = query.build().fetch_all(pool).await?;

    rows.iter()
        .map(|row| mapper::song_from_row(row).map_err(Into::into))
        .collect()
}

/// One song
pub async fn get_by_id(pool: &SqlitePool, id: &SongId) -> Result<Song> {
    let row = sqlx::query(&format!(
        "SELECT {} FROM songs WHERE id = ?",
        mapper::SONG_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| CatalogError::not_found(ENTITY, id.as_str()))?;

    Ok(mapper::song_from_row(&row)?)
}

/// Whether a song with this id exists
pub async fn exists(pool: &SqlitePool, id: &SongId) -> Result<bool> {
    let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM songs WHERE id = ?)")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(found)
}

/// Replace every field of a song.
///
/// The album name is re-read whenever the payload names an album, so the
/// snapshot always matches the album the song points at after the edit.
/// Without an album id both `album_id` and `album_name` are cleared.
pub async fn update(pool: &SqlitePool, id: &SongId, song: &SongPayload) -> Result<()> {
    let mut tx = pool.begin().await?;
    let album_name = resolve_album_name(&mut *tx, song.album_id.as_ref()).await?;

    let result = sqlx::query(
        "UPDATE songs
         SET title = ?, year = ?, genre = ?, performer = ?, duration = ?,
             album_id = ?, album_name = ?, updated_at = ?,
             title_folded = ?, performer_folded = ?
         WHERE id = ?",
    )
    .bind(&song.title)
    .bind(song.year)
    .bind(&song.genre)
    .bind(&song.performer)
    .bind(song.duration)
    .bind(song.album_id.as_ref())
    .bind(album_name.as_deref())
    .bind(timestamp_now())
    .bind(song.title.to_lowercase())
    .bind(song.performer.to_lowercase())
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        tx.rollback().await?;
        return Err(CatalogError::not_found(ENTITY, id.as_str()));
    }

    tx.commit().await?;

    tracing::debug!(song_id = %id, "Song updated");
    Ok(())
}

/// Delete a song and the join rows that reference it
pub async fn delete(pool: &SqlitePool, id: &SongId) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM album_songs WHERE song_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let removed = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if removed == 0 {
        tx.rollback().await?;
        return Err(CatalogError::not_found(ENTITY, id.as_str()));
    }

    tx.commit().await?;

    tracing::debug!(song_id = %id, "Song deleted");
    Ok(())
}

async fn resolve_album_name(
    conn: &mut SqliteConnection,
    album_id: Option<&AlbumId>,
) -> Result<Option<String>> {
    match album_id {
        Some(album_id) => albums::name_of(conn, album_id).await.map(Some),
        None => Ok(None),
    }
}

/// `%text%` with LIKE wildcards and the escape character escaped
fn like_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn add_failed(title: &str) -> CatalogError {
    CatalogError::invariant(format!("Failed to add song: {title}"))
}
