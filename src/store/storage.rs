//! Durable key-value backends.
//!
//! The store only needs string get/set under a fixed key, so the backend
//! contract is the same shape as a mobile key-value store: string keys,
//! string values, missing keys are `Ok(None)`.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::warn;

use crate::error::StorageError;

/// Directory under the user's config dir holding the storage file.
pub const CONFIG_DIR_NAME: &str = "tiktrack";

/// File name of the JSON storage document.
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// A string key-value store that survives process restarts.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage.
///
/// Clones share one map, which is how tests simulate a restart: build a
/// second store over a clone of the first store's backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage backed by a single JSON object file (`{"key": "value", ...}`).
///
/// The file is read on every access; there is no cache to go stale if
/// another process writes it. Writes go to a sibling temp file first and are
/// renamed into place. A document that no longer parses is an error on read
/// but is replaced on the next write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at [`FileStorage::default_path`].
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::new(Self::default_path()?))
    }

    /// `<config dir>/tiktrack/storage.json`, e.g.
    /// `~/.config/tiktrack/storage.json` on Linux.
    pub fn default_path() -> Result<PathBuf, StorageError> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(STORAGE_FILE_NAME))
            .ok_or_else(|| StorageError::Unavailable("no user config directory".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Current items as the base for a write. An unparseable document is
    /// dropped so the write replaces it.
    fn read_for_write(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.read_all() {
            Err(StorageError::Serialization(e)) => {
                warn!(path = %self.path.display(), error = %e, "overwriting corrupt storage file");
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(items)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.read_for_write()?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_storage_get_set() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);

        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
        assert_eq!(storage.len(), 1);
        assert!(!storage.is_empty());
    }

    #[test]
    fn test_memory_storage_clones_share_items() {
        let mut writer = MemoryStorage::new();
        let reader = writer.clone();
        writer.set_item("theme-storage", "{}").unwrap();
        assert_eq!(reader.get_item("theme-storage").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_storage_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("absent.json"));
        assert_eq!(storage.get_item("anything").unwrap(), None);
    }

    #[test]
    fn test_file_storage_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join(STORAGE_FILE_NAME);
        let mut storage = FileStorage::new(&path);

        storage.set_item("a", "1").unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_storage_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(dir.path().join(STORAGE_FILE_NAME));

        storage.set_item("a", "1").unwrap();
        storage.set_item("b", "2").unwrap();
        storage.set_item("a", "3").unwrap();

        let reopened = FileStorage::new(storage.path());
        assert_eq!(reopened.get_item("a").unwrap().as_deref(), Some("3"));
        assert_eq!(reopened.get_item("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_storage_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORAGE_FILE_NAME);
        fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(
            storage.get_item("a"),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn test_file_storage_write_replaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(STORAGE_FILE_NAME);
        fs::write(&path, "garbage").unwrap();

        let mut storage = FileStorage::new(&path);
        storage.set_item("a", "1").unwrap();
        storage.set_item("b", "2").unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get_item("a").unwrap().as_deref(), Some("1"));
        assert_eq!(reopened.get_item("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_file_storage_unwritable_location_is_an_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();

        // Parent "directory" is a regular file.
        let mut storage = FileStorage::new(blocker.join(STORAGE_FILE_NAME));
        assert!(storage.set_item("a", "1").is_err());
    }

    #[test]
    fn test_default_path_ends_with_storage_file() {
        if let Ok(path) = FileStorage::default_path() {
            assert!(path.ends_with(Path::new(CONFIG_DIR_NAME).join(STORAGE_FILE_NAME)));
        }
    }
}
