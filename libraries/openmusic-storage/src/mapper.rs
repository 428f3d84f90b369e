//! Row → model mapping
//!
//! Rows come back flat with snake_case columns and nullable SQL types; the
//! API models are camelCase and nest song summaries inside albums. These
//! functions only read from the row. NULL `duration`, `album_id` and
//! `album_name` stay `None`, and timestamps are copied as stored.

use openmusic_core::types::{Album, AlbumId, Song, SongId, SongSummary};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

/// Columns selected for every song query
pub const SONG_COLUMNS: &str = "id, title, year, genre, performer, duration, \
                                album_id, album_name, created_at, updated_at";

/// Map an `albums` row (list view, no songs)
pub fn album_from_row(row: &SqliteRow) -> Result<Album, sqlx::Error> {
    Ok(Album {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        year: row.try_get("year")?,
        songs: None,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// Map the rows of `albums LEFT JOIN songs` into one album.
///
/// Every row carries the album columns; `song_id`, `song_title` and
/// `song_performer` are NULL on the single row of an album without songs.
/// Returns `None` when there are no rows.
pub fn album_with_songs_from_rows(rows: &[SqliteRow]) -> Result<Option<Album>, sqlx::Error> {
    let Some(first) = rows.first() else {
        return Ok(None);
    };

    let mut album = album_from_row(first)?;
    let mut songs = Vec::new();
    for row in rows {
        if let Some(summary) = summary_from_row(row)? {
            songs.push(summary);
        }
    }
    album.songs = Some(songs);

    Ok(Some(album))
}

/// Map the joined song columns of an album row, if present
pub fn summary_from_row(row: &SqliteRow) -> Result<Option<SongSummary>, sqlx::Error> {
    let Some(id) = row.try_get::<Option<SongId>, _>("song_id")? else {
        return Ok(None);
    };

    Ok(Some(SongSummary {
        id,
        title: row.try_get("song_title")?,
        performer: row.try_get("song_performer")?,
    }))
}

/// Map a `songs` row
pub fn song_from_row(row: &SqliteRow) -> Result<Song, sqlx::Error> {
    Ok(Song {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        year: row.try_get("year")?,
        genre: row.try_get("genre")?,
        performer: row.try_get("performer")?,
        duration: row.try_get("duration")?,
        album_id: row.try_get::<Option<AlbumId>, _>("album_id")?,
        album_name: row.try_get("album_name")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
