//! JSON record store
//!
//! Persists whole JSON records under fixed keys inside a `.reflekt`
//! directory. Reads fail soft: a missing or unparseable record is treated
//! as absent so the caller can fall back to defaults. Writes replace the
//! record as a whole; there are no partial updates and no cross-key
//! transactions.

use crate::error::{ReflektError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Key for the entry collection record
pub const ENTRIES_KEY: &str = "entries";
/// Key for the settings record
pub const SETTINGS_KEY: &str = "settings";
/// Key for the streak record
pub const STREAK_KEY: &str = "streak";

/// All persisted record keys
pub const ALL_KEYS: [&str; 3] = [ENTRIES_KEY, SETTINGS_KEY, STREAK_KEY];

/// File-backed JSON store rooted at a journal directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    pub root: PathBuf,
}

impl JsonStore {
    /// Create a store with the given root directory
    pub fn new(root: PathBuf) -> Self {
        JsonStore { root }
    }

    /// Discover the journal root.
    /// First checks the REFLEKT_ROOT environment variable, then walks up
    /// from the current directory looking for a `.reflekt` marker.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("REFLEKT_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_marker_dir(&path) {
                return Ok(JsonStore::new(path));
            }
            return Err(ReflektError::Config(format!(
                "REFLEKT_ROOT is set to '{}' but no .reflekt directory found. \
                Run 'reflekt init' in that directory or unset REFLEKT_ROOT.",
                path.display()
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the journal root by walking up from a starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_marker_dir(&current) {
                return Ok(JsonStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(ReflektError::NotJournalDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_marker_dir(path: &Path) -> bool {
        path.join(".reflekt").is_dir()
    }

    /// Check if the `.reflekt` directory exists
    pub fn is_initialized(&self) -> bool {
        Self::has_marker_dir(&self.root)
    }

    /// Create the `.reflekt` directory
    pub fn initialize(&self) -> Result<()> {
        let marker_dir = self.root.join(".reflekt");

        if marker_dir.exists() {
            return Err(ReflektError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&marker_dir)?;
        Ok(())
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(".reflekt").join(format!("{}.json", key))
    }

    /// Read a record. Missing, unreadable, or corrupt records are absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.record_path(key);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(key, error = %e, "failed to read record, treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "corrupt record, treating as absent");
                None
            }
        }
    }

    /// Write a record as a whole, replacing any prior value.
    ///
    /// Serializes to a temporary file in the same directory and renames it
    /// into place, so a failed write leaves the prior record intact.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.record_path(key);
        let contents = serde_json::to_string_pretty(value)
            .map_err(|e| ReflektError::Storage(format!("failed to serialize '{}': {}", key, e)))?;

        let tmp_path = path.with_file_name(format!("{}.json.tmp-{}", key, std::process::id()));
        fs::write(&tmp_path, contents)
            .map_err(|e| ReflektError::Storage(format!("failed to write '{}': {}", key, e)))?;

        if path.exists() {
            // rename does not overwrite on Windows
            fs::remove_file(&path)
                .map_err(|e| ReflektError::Storage(format!("failed to replace '{}': {}", key, e)))?;
        }

        fs::rename(&tmp_path, &path)
            .map_err(|e| ReflektError::Storage(format!("failed to replace '{}': {}", key, e)))?;
        Ok(())
    }

    /// Remove a record. Removing an absent record is not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.record_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ReflektError::Storage(format!(
                "failed to remove '{}': {}",
                key, e
            ))),
        }
    }
}
