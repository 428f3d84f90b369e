/// Server error types
///
/// This is the single place where catalog failures become HTTP responses.
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use openmusic_core::{CatalogError, ErrorKind};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Message returned for every server-side failure
pub const GENERIC_SERVER_MESSAGE: &str = "Sorry, the server failed to process the request.";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Invariant(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// Client-visible classification
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServerError::Validation(_) => ErrorKind::Validation,
            ServerError::NotFound(_) => ErrorKind::NotFound,
            ServerError::Invariant(_) => ErrorKind::Invariant,
            ServerError::Internal(_) | ServerError::Config(_) => ErrorKind::Server,
        }
    }
}

/// Typed catalog errors pass through; storage failures are logged here and
/// reduced to an opaque `Internal`.
impl From<CatalogError> for ServerError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(msg) => ServerError::Validation(msg),
            err @ CatalogError::NotFound { .. } => ServerError::NotFound(err.to_string()),
            CatalogError::Invariant(msg) => ServerError::Invariant(msg),
            CatalogError::Database(msg) => {
                tracing::error!("Storage failure: {}", msg);
                ServerError::Internal(msg)
            }
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ServerError {
    fn from(rejection: PathRejection) -> Self {
        ServerError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = StatusCode::from_u16(kind.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = if kind.is_client_error() {
            json!({
                "status": "fail",
                "message": self.to_string(),
            })
        } else {
            if let ServerError::Config(ref msg) = self {
                tracing::error!("Config error: {}", msg);
            }
            json!({
                "status": "error",
                "message": GENERIC_SERVER_MESSAGE,
            })
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_catalog_errors_keep_their_kind() {
        let not_found: ServerError = CatalogError::not_found("Song", "abc").into();
        assert_eq!(not_found.kind(), ErrorKind::NotFound);
        assert_eq!(not_found.to_string(), "Song not found: abc");

        let conflict: ServerError = CatalogError::invariant("Failed to add album: 25").into();
        assert_eq!(conflict.kind(), ErrorKind::Invariant);

        let invalid: ServerError = CatalogError::validation("\"name\" is not allowed to be empty").into();
        assert!(matches!(invalid, ServerError::Validation(ref m) if m.contains("name")));
    }

    #[test]
    fn database_errors_collapse_to_internal() {
        let err: ServerError = CatalogError::database("disk I/O error").into();
        assert!(matches!(err, ServerError::Internal(_)));
        assert_eq!(err.kind(), ErrorKind::Server);
    }

    #[test]
    fn responses_use_mapped_status_codes() {
        let cases = [
            (ServerError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (ServerError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (ServerError::Invariant("dup".into()), StatusCode::CONFLICT),
            (ServerError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
