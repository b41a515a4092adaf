//! Error types for catalog operations

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Bookshelf operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A required book field was empty
    #[error("{field} must not be empty")]
    Validation {
        /// Name of the first empty field
        field: &'static str,
    },

    /// No book matched the given title
    #[error("no book titled \"{title}\"")]
    NotFound {
        /// Title that was looked up
        title: String,
    },

    /// The catalog file exists but does not hold a list of books
    #[error("catalog file {path} is corrupt: {message}")]
    CorruptData {
        /// Path of the offending file
        path: PathBuf,
        /// Parser diagnostic
        message: String,
    },

    /// Reading or writing the catalog file failed
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The collection could not be encoded
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl CatalogError {
    /// Create a validation error for the named field.
    pub fn validation(field: &'static str) -> Self {
        Self::Validation { field }
    }

    /// Create a not-found error for a title.
    pub fn not_found(title: impl Into<String>) -> Self {
        Self::NotFound {
            title: title.into(),
        }
    }

    /// Create a corrupt-data error with path context.
    pub fn corrupt(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::CorruptData {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

/// Result type alias for Bookshelf operations
pub type Result<T> = std::result::Result<T, CatalogError>;
