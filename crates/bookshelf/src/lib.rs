//! # Bookshelf
//!
//! A single-user personal library catalog.
//!
//! Books (title, author, year, genre, read status) are kept in one JSON
//! file that is read in full at the start of every action and rewritten in
//! full after every change.
//!
//! ## Architecture
//!
//! - **Collection**: the ordered list of [`Book`]s
//! - **Operations** ([`ops`]): pure add/remove/search/list/statistics/recent
//! - **Store**: the [`Store`] trait with [`FileStore`] and [`MemoryStore`]
//! - **Catalog**: [`Catalog`] runs load → operation → save against a store
//! - **Shell**: an interactive menu over the catalog, see [`shell`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod book;
pub mod catalog;
pub mod collection;
pub mod command;
pub mod config;
pub mod display;
pub mod error;
pub mod ops;
pub mod shell;
pub mod store;

// Re-export main types
pub use book::Book;
pub use catalog::Catalog;
pub use collection::Collection;
pub use command::{describe_error, execute, Request};
pub use config::Config;
pub use error::{CatalogError, Result};
pub use ops::{
    add_book, list_all, recently_added, remove_book, search_by_title, statistics, Statistics,
    DEFAULT_RECENT_COUNT,
};
pub use shell::{Action, Input, Prompt, Shell};
pub use store::{FileStore, MemoryStore, Store};

/// Bookshelf version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
