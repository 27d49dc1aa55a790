//! JSON file-based storage backend.
//!
//! Keeps the whole key-value map in memory and rewrites the file on every
//! change. Writes go to a temporary file that is then renamed over the target,
//! so a crash never leaves a half-written file behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": {
//!     "sidebarCollapsed": "true",
//!     "theme": "dark"
//!   }
//! }
//! ```

use crate::domain::error::{NavError, Result};
use crate::storage::backend::{StorageBackend, Tier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk container.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Format version for future migrations.
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: BTreeMap::new(),
        }
    }
}

/// Key-value store persisted to a JSON file.
///
/// Used for both the durable tier (data directory) and the session tier
/// (temporary directory, cleared by the OS between sessions).
///
/// # Examples
///
/// ```no_run
/// use campusnav::storage::{JsonFileStore, StorageBackend, Tier};
/// use std::path::PathBuf;
///
/// let mut store = JsonFileStore::open(PathBuf::from("/tmp/campusnav/local.json"), Tier::Durable)?;
/// store.set("theme", "dark")?;
/// # Ok::<(), campusnav::NavError>(())
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    file_path: PathBuf,
    tier: Tier,
    data: StorageData,
    /// Set when an in-memory change has not reached the file yet.
    dirty: bool,
}

impl JsonFileStore {
    /// Opens the store at `file_path`, creating parent directories.
    ///
    /// A missing file starts an empty store; the file is created on the
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// existing file cannot be read or parsed.
    pub fn open(file_path: PathBuf, tier: Tier) -> Result<Self> {
        tracing::debug!(path = ?file_path, %tier, "opening JSON storage");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            StorageData::default()
        };

        tracing::debug!(entries = data.entries.len(), "JSON storage opened");

        Ok(Self {
            file_path,
            tier,
            data,
            dirty: false,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| NavError::Storage(format!("failed to parse {}: {e}", path.display())))?;
        Ok(data)
    }

    /// Writes the map to disk via temp file + rename. No-op when clean.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)?;
        let tmp_path = self.file_path.with_extension("tmp");

        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::trace!(path = ?self.file_path, "storage saved");
        Ok(())
    }
}

impl StorageBackend for JsonFileStore {
    fn tier(&self) -> Tier {
        self.tier
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.data.entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.data.entries.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.data.entries.remove(key).is_some() {
            self.dirty = true;
        }
        self.save_to_file()
    }

    fn clear(&mut self) -> Result<()> {
        if !self.data.entries.is_empty() {
            self.data.entries.clear();
            self.dirty = true;
        }
        self.save_to_file()
    }
}

impl Drop for JsonFileStore {
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, path = ?self.file_path, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("local.json");

        {
            let mut store = JsonFileStore::open(path.clone(), Tier::Durable).unwrap();
            store.set("adminSidebarCollapsed", "true").unwrap();
            store.set("theme", "dark").unwrap();
            store.remove("theme").unwrap();
        }

        let store = JsonFileStore::open(path, Tier::Durable).unwrap();
        assert_eq!(store.get("adminSidebarCollapsed").unwrap().as_deref(), Some("true"));
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileStore::open(path, Tier::Durable).unwrap_err();
        assert!(matches!(err, NavError::Storage(_)));
    }

    #[test]
    fn clear_empties_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut store = JsonFileStore::open(path.clone(), Tier::Session).unwrap();
        store.set("user", "{}").unwrap();
        store.clear().unwrap();
        drop(store);

        let raw = std::fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["entries"], serde_json::json!({}));
    }
}
