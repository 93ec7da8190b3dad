//! Unified error type for hwtracker.
//!
//! All crates funnel their failures into [`Error`], which carries enough context
//! for route handlers to derive an HTTP status code via [`Error::http_status`].

use std::fmt;

/// Unified error type covering all failure modes in hwtracker.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested entity could not be found.
    #[error("No {entity} found with id = \"{id}\"")]
    NotFound {
        /// The kind of entity (e.g. "item").
        entity: String,
        /// The identifier exactly as the caller supplied it.
        id: String,
    },

    /// Malformed configuration input.
    #[error("{0}")]
    Validation(String),

    /// A database operation failed. Displays the raw storage message.
    #[error("{source}")]
    Database {
        /// The underlying database error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Map this error to an appropriate HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::NotFound { .. } => 404,
            Error::Validation(_) => 400,
            Error::Database { .. } => 500,
            Error::Io { .. } => 500,
            Error::Internal(_) => 500,
        }
    }

    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(entity: impl Into<String>, id: impl fmt::Display) -> Self {
        Error::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Convenience constructor for [`Error::Database`].
    pub fn database(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Database {
            source: source.into(),
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = Error::not_found("item", 9999);
        assert_eq!(err.to_string(), "No item found with id = \"9999\"");
        assert_eq!(err.http_status(), 404);
    }

    #[test]
    fn not_found_echoes_raw_id() {
        let err = Error::not_found("item", "007");
        assert_eq!(err.to_string(), "No item found with id = \"007\"");
    }

    #[test]
    fn validation_display() {
        let err = Error::Validation("config parse error: expected value".into());
        assert_eq!(err.to_string(), "config parse error: expected value");
        assert_eq!(err.http_status(), 400);
    }

    #[test]
    fn database_display_is_raw() {
        let err = Error::database("NOT NULL constraint failed: Item.class_name");
        assert_eq!(
            err.to_string(),
            "NOT NULL constraint failed: Item.class_name"
        );
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn io_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(err.http_status(), 500);
    }

    #[test]
    fn internal_display() {
        let err = Error::Internal("unexpected state".into());
        assert_eq!(err.to_string(), "Internal error: unexpected state");
        assert_eq!(err.http_status(), 500);
    }
}
