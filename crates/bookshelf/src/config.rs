//! Runtime configuration

use std::path::PathBuf;

use crate::ops::DEFAULT_RECENT_COUNT;

/// Default catalog file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "library.txt";

/// Environment variable that overrides the catalog file.
pub const DATA_FILE_ENV: &str = "BOOKSHELF_FILE";

/// Settings for a Bookshelf session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the JSON catalog file
    pub data_file: PathBuf,

    /// How many books the "recently added" view shows
    pub recent_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            recent_count: DEFAULT_RECENT_COUNT,
        }
    }
}

impl Config {
    /// Create a config pointing at a specific catalog file.
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            ..Default::default()
        }
    }

    /// Override how many books the "recently added" view shows.
    pub fn recent_count(mut self, n: usize) -> Self {
        self.recent_count = n;
        self
    }
}
