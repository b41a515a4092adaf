//! Store-backed catalog facade

use tracing::{debug, info};

use crate::book::Book;
use crate::collection::Collection;
use crate::error::{CatalogError, Result};
use crate::ops::{self, Statistics};
use crate::store::Store;

/// Runs catalog operations against a [`Store`].
///
/// Each call loads the full collection, applies one operation and, for
/// add and remove, saves the result before returning. Nothing is held
/// between calls, so every action sees the current file contents.
///
/// # Example
///
/// ```
/// use bookshelf::{Book, Catalog, MemoryStore};
///
/// let catalog = Catalog::new(MemoryStore::new());
/// catalog.add(Book::new("Dune", "Herbert", "1965", "SciFi", true)).unwrap();
///
/// let stats = catalog.statistics().unwrap();
/// assert_eq!(stats.total, 1);
/// assert_eq!(stats.percent_read, 100.0);
/// ```
#[derive(Debug)]
pub struct Catalog<S> {
    store: S,
}

impl<S: Store> Catalog<S> {
    /// Create a catalog over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate and append a book, then persist. Returns the saved collection.
    ///
    /// A validation failure neither changes nor saves anything.
    pub fn add(&self, book: Book) -> Result<Collection> {
        let mut collection = self.store.load()?;
        let title = book.title.clone();
        ops::add_book(&mut collection, book)?;
        self.store.save(&collection)?;
        info!(title = %title, total = collection.len(), "added book");
        Ok(collection)
    }

    /// Remove every book titled exactly `title`, then persist.
    ///
    /// Fails with [`CatalogError::NotFound`] when nothing matched; in that
    /// case the store is not rewritten.
    pub fn remove(&self, title: &str) -> Result<Collection> {
        let mut collection = self.store.load()?;
        let removed = ops::remove_book(&mut collection, title);
        if removed == 0 {
            debug!(title = %title, "remove matched no books");
            return Err(CatalogError::not_found(title));
        }
        self.store.save(&collection)?;
        info!(title = %title, removed, total = collection.len(), "removed books");
        Ok(collection)
    }

    /// Books whose title contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Result<Vec<Book>> {
        let collection = self.store.load()?;
        Ok(ops::search_by_title(&collection, query).cloned().collect())
    }

    /// Every book in stored order.
    pub fn list(&self) -> Result<Vec<Book>> {
        let collection = self.store.load()?;
        Ok(ops::list_all(&collection).to_vec())
    }

    /// Totals and read percentage.
    pub fn statistics(&self) -> Result<Statistics> {
        let collection = self.store.load()?;
        Ok(ops::statistics(&collection))
    }

    /// The `n` most recently added books, oldest first.
    pub fn recent(&self, n: usize) -> Result<Vec<Book>> {
        let collection = self.store.load()?;
        Ok(ops::recently_added(&collection, n).to_vec())
    }

    /// Titles in stored order, for offering a removal choice.
    pub fn titles(&self) -> Result<Vec<String>> {
        let collection = self.store.load()?;
        Ok(collection.titles().into_iter().map(String::from).collect())
    }
}
