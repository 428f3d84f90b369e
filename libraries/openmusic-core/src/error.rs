/// Core error types for the OpenMusic catalog
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Core error type for the catalog.
///
/// The set of variants is closed: every failure a repository can report is
/// one of these, and `kind()` decides how it is surfaced to clients.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Payload failed schema constraints
    #[error("{0}")]
    Validation(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity name, e.g. `Album`
        entity: String,
        /// Identifier that was looked up
        id: String,
    },

    /// A storage invariant was violated (unique name, duplicate id,
    /// insert that returned no row)
    #[error("{0}")]
    Invariant(String),

    /// Unexpected storage failure
    #[error("Database error: {0}")]
    Database(String),
}

/// Client-visible error classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad payload (400)
    Validation,
    /// Unknown id (404)
    NotFound,
    /// Invariant/conflict (409)
    Invariant,
    /// Anything else (500)
    Server,
}

impl ErrorKind {
    /// HTTP status code for this kind
    pub const fn status_code(self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::NotFound => 404,
            Self::Invariant => 409,
            Self::Server => 500,
        }
    }

    /// Whether the failure is attributable to the caller
    pub const fn is_client_error(self) -> bool {
        !matches!(self, Self::Server)
    }
}

impl CatalogError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invariant error
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Client-visible classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Invariant(_) => ErrorKind::Invariant,
            Self::Database(_) => ErrorKind::Server,
        }
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::Invariant(db.message().to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_table_covers_every_kind() {
        assert_eq!(ErrorKind::Validation.status_code(), 400);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::Invariant.status_code(), 409);
        assert_eq!(ErrorKind::Server.status_code(), 500);
    }

    #[test]
    fn database_errors_are_server_kind() {
        let err = CatalogError::database("connection reset");
        assert_eq!(err.kind(), ErrorKind::Server);
        assert!(!err.kind().is_client_error());
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        let err = CatalogError::not_found("Album", "abc");
        assert_eq!(err.to_string(), "Album not found: abc");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
