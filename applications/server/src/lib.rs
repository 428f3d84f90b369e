//! OpenMusic Server Library
//!
//! HTTP surface for the album/song catalog: routing, payload validation,
//! and the mapping of catalog errors onto responses.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod validator;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::{AlbumsService, SongsService};
pub use state::AppState;
