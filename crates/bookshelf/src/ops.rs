//! Catalog operations over an in-memory collection
//!
//! Every function here is free of I/O. Persistence is layered on top by
//! [`Catalog`](crate::Catalog), which loads a collection, applies one of
//! these operations and saves the result when it changed.

use crate::book::Book;
use crate::collection::Collection;
use crate::error::Result;

/// Number of books shown by the "recently added" view.
pub const DEFAULT_RECENT_COUNT: usize = 2;

/// Aggregate counts over a collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Number of books
    pub total: usize,

    /// Number of books marked as read
    pub read_count: usize,

    /// `100 * read_count / total`, or `0.0` for an empty collection
    pub percent_read: f64,
}

// ═══════════════════════════════════════════════════════════════════════
// Mutating operations
// ═══════════════════════════════════════════════════════════════════════

/// Validate `book` and append it.
///
/// On a validation failure the collection is left untouched.
/// Duplicate titles are accepted.
pub fn add_book(collection: &mut Collection, book: Book) -> Result<()> {
    book.validate()?;
    collection.push(book);
    Ok(())
}

/// Remove every book whose title equals `title` exactly (case-sensitive).
///
/// Returns how many books were removed; zero leaves the collection as it was.
pub fn remove_book(collection: &mut Collection, title: &str) -> usize {
    collection.retain(|book| book.title != title)
}

// ═══════════════════════════════════════════════════════════════════════
// Queries
// ═══════════════════════════════════════════════════════════════════════

/// Books whose title contains `query`, ignoring case, in stored order.
///
/// An empty query matches every book.
pub fn search_by_title<'a>(
    collection: &'a Collection,
    query: &str,
) -> impl Iterator<Item = &'a Book> + 'a {
    let needle = query.to_lowercase();
    collection
        .iter()
        .filter(move |book| book.title.to_lowercase().contains(&needle))
}

/// The whole collection in stored order.
pub fn list_all(collection: &Collection) -> &[Book] {
    collection.as_slice()
}

/// Count books and the share of them that have been read.
pub fn statistics(collection: &Collection) -> Statistics {
    let total = collection.len();
    let read_count = collection.iter().filter(|book| book.read).count();
    let percent_read = if total > 0 {
        100.0 * read_count as f64 / total as f64
    } else {
        0.0
    };
    Statistics {
        total,
        read_count,
        percent_read,
    }
}

/// The last `min(n, len)` books, oldest first.
pub fn recently_added(collection: &Collection, n: usize) -> &[Book] {
    let books = collection.as_slice();
    &books[books.len().saturating_sub(n)..]
}
