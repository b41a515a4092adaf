//! Persistence boundary for the collection
//!
//! A [`Store`] hands out the full collection on every `load` and replaces
//! it wholesale on every `save`. Nothing is cached between calls.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::collection::Collection;
use crate::error::Result;

/// Storage interface for the catalog.
pub trait Store {
    /// Read the full collection. A store that has never been written
    /// yields an empty collection.
    fn load(&self) -> Result<Collection>;

    /// Replace the stored collection with `collection`.
    fn save(&self, collection: &Collection) -> Result<()>;
}
