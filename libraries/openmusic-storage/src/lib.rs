//! OpenMusic Storage
//!
//! `SQLite` persistence for the OpenMusic album/song catalog.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: `albums` and `songs` each own their queries
//! - **Weak References**: `songs.album_id` has no foreign key; the slices
//!   keep it consistent (lookup on write, cascade on album delete)
//! - **Transactions**: every multi-statement mutation runs in one transaction
//!
//! # Example
//!
//! ```rust,no_run
//! use openmusic_core::{AlbumPayload, AlbumRepository};
//! use openmusic_storage::{create_pool, run_migrations, SqliteAlbumRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://openmusic.db", 5).await?;
//! run_migrations(&pool).await?;
//!
//! let albums = SqliteAlbumRepository::new(pool);
//! let id = albums.add(&AlbumPayload::new("Thriller", 1982)).await?;
//! let album = albums.get_by_id(&id).await?;
//! # Ok(())
//! # }
//! ```

mod context;
pub mod mapper;

// Vertical slices
pub mod albums;
pub mod songs;

pub use context::{SqliteAlbumRepository, SqliteSongRepository};

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://openmusic.db>`)
/// * `max_connections` - upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, max_connections, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!("SQLite pool ready");

    Ok(pool)
}
