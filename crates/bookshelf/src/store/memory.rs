//! In-process storage, used as a test double.

use std::cell::{Cell, RefCell};
use std::io;

use super::Store;
use crate::collection::Collection;
use crate::error::{CatalogError, Result};

/// Keeps the collection in memory and counts saves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collection: RefCell<Collection>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `collection`.
    pub fn with_collection(collection: Collection) -> Self {
        Self {
            collection: RefCell::new(collection),
            ..Default::default()
        }
    }

    /// Snapshot of the stored collection.
    pub fn snapshot(&self) -> Collection {
        self.collection.borrow().clone()
    }

    /// How many times `save` has succeeded.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Make every subsequent `save` fail with an I/O error.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Collection> {
        Ok(self.snapshot())
    }

    fn save(&self, collection: &Collection) -> Result<()> {
        if self.fail_saves.get() {
            return Err(CatalogError::io(
                "<memory>",
                io::Error::new(io::ErrorKind::Other, "save disabled"),
            ));
        }
        *self.collection.borrow_mut() = collection.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
