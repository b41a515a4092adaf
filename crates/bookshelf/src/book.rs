//! The book record

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// A single catalog entry.
///
/// The field set mirrors the on-disk JSON object exactly:
/// `title`, `author`, `year`, `genre`, `read`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title; also the key used by removal and search
    pub title: String,

    /// Author name
    pub author: String,

    /// Publication year, kept as free-form text
    pub year: String,

    /// Genre label
    pub genre: String,

    /// Whether the book has been read
    pub read: bool,
}

impl Book {
    /// Create a book with every text field kept exactly as entered.
    ///
    /// No validation happens here; see [`Book::validate`].
    pub fn new(
        title: impl AsRef<str>,
        author: impl AsRef<str>,
        year: impl AsRef<str>,
        genre: impl AsRef<str>,
        read: bool,
    ) -> Self {
        Self {
            title: title.as_ref().to_string(),
            author: author.as_ref().to_string(),
            year: year.as_ref().to_string(),
            genre: genre.as_ref().to_string(),
            read,
        }
    }

    /// Check that every required text field has non-whitespace content.
    ///
    /// Fields are checked in the order title, author, year, genre and the
    /// first blank one is reported.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("title", &self.title),
            ("author", &self.author),
            ("year", &self.year),
            ("genre", &self.genre),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(CatalogError::validation(*name)),
            None => Ok(()),
        }
    }

    /// Human-readable read status.
    pub fn status(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Unread"
        }
    }
}
