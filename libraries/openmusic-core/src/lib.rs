//! OpenMusic Core
//!
//! Storage-agnostic domain types, repository traits, and error handling for
//! the OpenMusic catalog.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Album`, `Song`, `SongSummary` and their write payloads
//! - **Identifiers**: 16-character URL-safe ids (`AlbumId`, `SongId`)
//! - **Repository Traits**: `AlbumRepository`, `SongRepository`
//! - **Error Handling**: the closed `CatalogError` enum and its status table
//!
//! # Example
//!
//! ```rust
//! use openmusic_core::types::{AlbumId, AlbumPayload};
//!
//! let id = AlbumId::generate();
//! assert_eq!(id.as_str().len(), 16);
//!
//! let payload = AlbumPayload::new("Thriller", 1982);
//! assert_eq!(payload.name, "Thriller");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod ids;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{CatalogError, ErrorKind, Result};
pub use storage::{AlbumRepository, SongRepository};

pub use types::{
    Album, AlbumId, AlbumPayload, Song, SongFilter, SongId, SongPayload, SongSummary,
};
