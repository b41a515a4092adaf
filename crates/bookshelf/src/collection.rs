//! The ordered collection of books

use serde::{Deserialize, Serialize};

use crate::book::Book;

/// All books in the catalog, in insertion order.
///
/// Serializes as a bare JSON array with no envelope or version marker.
///
/// # Example
///
/// ```
/// use bookshelf::{Book, Collection};
///
/// let mut shelf = Collection::new();
/// shelf.push(Book::new("Dune", "Herbert", "1965", "SciFi", true));
/// shelf.push(Book::new("Emma", "Austen", "1815", "Classic", false));
///
/// assert_eq!(shelf.len(), 2);
/// assert_eq!(shelf.titles(), vec!["Dune", "Emma"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    books: Vec<Book>,
}

impl Collection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True when the collection holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Append a book at the end (most recent position).
    pub fn push(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Keep only the books for which `keep` returns true.
    ///
    /// Returns how many books were dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&Book) -> bool) -> usize {
        let before = self.books.len();
        self.books.retain(|book| keep(book));
        before - self.books.len()
    }

    /// Iterate over the books in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }

    /// Borrow the books as a slice.
    pub fn as_slice(&self) -> &[Book] {
        &self.books
    }

    /// Titles in stored order, duplicates included.
    pub fn titles(&self) -> Vec<&str> {
        self.books.iter().map(|book| book.title.as_str()).collect()
    }
}

impl From<Vec<Book>> for Collection {
    fn from(books: Vec<Book>) -> Self {
        Self { books }
    }
}

impl FromIterator<Book> for Collection {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}
