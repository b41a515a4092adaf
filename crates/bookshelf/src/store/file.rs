//! JSON file storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Store;
use crate::collection::Collection;
use crate::error::{CatalogError, Result};

/// Stores the collection as a JSON array in a single file.
///
/// A missing file reads as an empty collection. Saves write a sibling
/// `<name>.tmp` file and rename it over the target, so a crash mid-write
/// leaves the previous contents intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl Store for FileStore {
    fn load(&self) -> Result<Collection> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "catalog file missing, starting empty");
                return Ok(Collection::new());
            }
            Err(e) => return Err(CatalogError::io(&self.path, e)),
        };

        if contents.trim().is_empty() {
            return Ok(Collection::new());
        }

        let collection: Collection = serde_json::from_str(&contents).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "failed to parse catalog file");
            CatalogError::corrupt(&self.path, e.to_string())
        })?;

        debug!(path = %self.path.display(), books = collection.len(), "loaded catalog");
        Ok(collection)
    }

    fn save(&self, collection: &Collection) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| CatalogError::io(parent, e))?;
            }
        }

        let content = serde_json::to_string_pretty(collection)
            .map_err(|e| CatalogError::serialization(e.to_string()))?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, content).map_err(|e| CatalogError::io(&temp_path, e))?;
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(CatalogError::io(&self.path, e));
        }

        debug!(path = %self.path.display(), books = collection.len(), "saved catalog");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Book;
    use tempfile::TempDir;

    fn sample() -> Collection {
        Collection::from(vec![
            Book::new("Dune", "Herbert", "1965", "SciFi", true),
            Book::new("Emma", "Austen", "1815", "Classic", false),
        ])
    }

    #[test]
    fn load_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("library.txt"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn load_blank_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("library.txt");
        fs::write(&path, "  \n").unwrap();
        assert!(FileStore::new(&path).load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("library.txt"));
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn save_creates_parent_dirs_and_leaves_no_temp_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("dir").join("library.txt");
        let store = FileStore::new(&path);
        store.save(&sample()).unwrap();

        assert!(path.exists());
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn save_overwrites_existing() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("library.txt"));
        store.save(&sample()).unwrap();
        store.save(&Collection::new()).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw.trim(), "[]");
    }

    #[test]
    fn load_reads_compact_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("library.txt");
        fs::write(
            &path,
            r#"[{"title": "Dune", "author": "Herbert", "year": "1965", "genre": "SciFi", "read": true}]"#,
        )
        .unwrap();

        let loaded = FileStore::new(&path).load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.titles(), vec!["Dune"]);
    }

    #[test]
    fn load_malformed_is_corrupt() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("library.txt");
        fs::write(&path, "{ not json").unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, CatalogError::CorruptData { .. }));
        assert!(err.to_string().contains("library.txt"));
    }

    #[test]
    fn load_wrong_shape_is_corrupt() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("library.txt");
        fs::write(&path, r#"{"title": "Dune"}"#).unwrap();

        let err = FileStore::new(&path).load().unwrap_err();
        assert!(matches!(err, CatalogError::CorruptData { .. }));
    }

    #[test]
    fn load_directory_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = FileStore::new(tmp.path()).load().unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
