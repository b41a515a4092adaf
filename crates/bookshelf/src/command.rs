//! Requests and their human-readable results
//!
//! Both the one-shot subcommands and the interactive shell build a
//! [`Request`], hand it to [`execute`], and print whatever comes back.

use tracing::debug;

use crate::book::Book;
use crate::catalog::Catalog;
use crate::display::render_books;
use crate::error::{CatalogError, Result};
use crate::store::Store;

/// One user action with its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Add a book
    Add(Book),

    /// Remove all books with this exact title
    Remove(String),

    /// Case-insensitive title search
    Search(String),

    /// Show every book
    List,

    /// Show totals and read percentage
    Stats,

    /// Show the last N books added
    Recent(usize),
}

impl Request {
    /// Whether running this request rewrites the catalog file.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Request::Add(_) | Request::Remove(_))
    }
}

/// Run `request` against `catalog` and return the text to show the user.
pub fn execute<S: Store>(catalog: &Catalog<S>, request: Request) -> Result<String> {
    debug!(?request, mutating = request.is_mutating(), "executing request");
    match request {
        Request::Add(book) => {
            let title = book.title.clone();
            catalog.add(book)?;
            Ok(format!("Book \"{}\" added successfully!", title))
        }
        Request::Remove(title) => {
            catalog.remove(&title)?;
            Ok(format!("Book \"{}\" removed successfully!", title))
        }
        Request::Search(query) => {
            let found = catalog.search(&query)?;
            let miss = format!("No books found with the title \"{}\"!", query);
            Ok(render_books(&found, &miss))
        }
        Request::List => Ok(render_books(&catalog.list()?, "No books found!")),
        Request::Stats => Ok(catalog.statistics()?.to_string()),
        Request::Recent(n) => Ok(render_books(
            &catalog.recent(n)?,
            "No recently added books to display!",
        )),
    }
}

/// User-facing message for a failed request.
pub fn describe_error(err: &CatalogError) -> String {
    match err {
        CatalogError::Validation { field } => {
            format!("Please fill out all fields! ({} is empty)", field)
        }
        CatalogError::NotFound { title } => {
            format!("No book titled \"{}\" in your library!", title)
        }
        other => format!("Error: {}", other),
    }
}
