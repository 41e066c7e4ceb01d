//! Namespaced key-value storage for session hints
//!
//! Values are serialized to JSON before they reach the backend, so any
//! `Serialize` type can be stored and read back with `DeserializeOwned`.
//! Every key is prefixed with the storage namespace, and [`Storage::clear`]
//! only removes keys under that prefix. Other data living in the same backend
//! is left alone.
//!
//! # Example
//!
//! ```rust,ignore
//! use plaready_core::storage::{FileStore, Storage};
//!
//! let storage = Storage::new("plaready", FileStore::open("session.json")?);
//!
//! storage.set("user", &user)?;
//! if let Some(user) = storage.get::<User>("user")? {
//!     println!("Welcome back, {}", user.name);
//! }
//! ```

use crate::error::{Error, Result, ResultExt};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Raw string key-value capability underneath [`Storage`]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value for a key
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write the raw value for a key
    fn set_item(&self, key: &str, value: String) -> Result<()>;

    /// Delete a key, returning whether it existed
    fn remove_item(&self, key: &str) -> Result<bool>;

    /// All keys currently stored
    fn keys(&self) -> Result<Vec<String>>;
}

/// In-memory backend
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let guard = self
            .items
            .read()
            .map_err(|_| Error::internal("Failed to acquire storage read lock"))?;
        Ok(guard.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: String) -> Result<()> {
        let mut guard = self
            .items
            .write()
            .map_err(|_| Error::internal("Failed to acquire storage write lock"))?;
        guard.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<bool> {
        let mut guard = self
            .items
            .write()
            .map_err(|_| Error::internal("Failed to acquire storage write lock"))?;
        Ok(guard.remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let guard = self
            .items
            .read()
            .map_err(|_| Error::internal("Failed to acquire storage read lock"))?;
        Ok(guard.keys().cloned().collect())
    }
}

/// File-backed backend
///
/// The whole map lives in memory and is written back as one JSON object
/// after every mutation.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open a store at `path`, creating parent directories as needed
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(Error::from)
                    .context(format!("Failed to create {}", parent.display()))?;
            }
        }

        let items = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|e| {
                    Error::storage_corrupted(&path).with_source(e)
                })?
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            items: RwLock::new(items),
        })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, items: &BTreeMap<String, String>) -> Result<()> {
        let data = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, data)
            .map_err(Error::from)
            .context(format!("Failed to write {}", self.path.display()))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let guard = self
            .items
            .read()
            .map_err(|_| Error::internal("Failed to acquire storage read lock"))?;
        Ok(guard.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: String) -> Result<()> {
        let mut guard = self
            .items
            .write()
            .map_err(|_| Error::internal("Failed to acquire storage write lock"))?;
        let mut next = guard.clone();
        next.insert(key.to_string(), value);
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<bool> {
        let mut guard = self
            .items
            .write()
            .map_err(|_| Error::internal("Failed to acquire storage write lock"))?;
        if !guard.contains_key(key) {
            return Ok(false);
        }
        let mut next = guard.clone();
        next.remove(key);
        self.persist(&next)?;
        *guard = next;
        Ok(true)
    }

    fn keys(&self) -> Result<Vec<String>> {
        let guard = self
            .items
            .read()
            .map_err(|_| Error::internal("Failed to acquire storage read lock"))?;
        Ok(guard.keys().cloned().collect())
    }
}

/// JSON storage scoped to one namespace
pub struct Storage {
    prefix: String,
    backend: Box<dyn KeyValueStore>,
}

impl Storage {
    /// Create storage writing keys as `<namespace>:<key>`
    pub fn new(namespace: &str, backend: impl KeyValueStore + 'static) -> Self {
        Self {
            prefix: format!("{namespace}:"),
            backend: Box::new(backend),
        }
    }

    /// Namespace prefix including the separator
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Serialize `value` to JSON and store it under `key`
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let data = serde_json::to_string(value)?;
        self.backend.set_item(&self.scoped(key), data)
    }

    /// Read and deserialize the value under `key`
    ///
    /// A key that was never set yields `Ok(None)`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.backend.get_item(&self.scoped(key))? {
            Some(data) => {
                let value = serde_json::from_str(&data)
                    .map_err(Error::from)
                    .context(format!("Stored value for '{key}' is not valid JSON"))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Remove `key`, returning whether it existed
    pub fn remove(&self, key: &str) -> Result<bool> {
        self.backend.remove_item(&self.scoped(key))
    }

    /// Remove every key in this namespace, returning how many were removed
    pub fn clear(&self) -> Result<usize> {
        let mut removed = 0;
        for key in self.backend.keys()? {
            if key.starts_with(&self.prefix) && self.backend.remove_item(&key)? {
                removed += 1;
            }
        }
        tracing::debug!(namespace = %self.prefix, removed, "Cleared storage namespace");
        Ok(removed)
    }

    fn scoped(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct SessionUser {
        id: u64,
        name: String,
        role: String,
    }

    /// Lets a test inspect the backend after handing it to `Storage`
    struct Shared(Arc<MemoryStore>);

    impl KeyValueStore for Shared {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            self.0.get_item(key)
        }
        fn set_item(&self, key: &str, value: String) -> Result<()> {
            self.0.set_item(key, value)
        }
        fn remove_item(&self, key: &str) -> Result<bool> {
            self.0.remove_item(key)
        }
        fn keys(&self) -> Result<Vec<String>> {
            self.0.keys()
        }
    }

    #[test]
    fn test_set_and_get() {
        let storage = Storage::new("plaready", MemoryStore::new());
        let user = SessionUser {
            id: 7,
            name: "Asha".to_string(),
            role: "customer".to_string(),
        };

        storage.set("user", &user).unwrap();
        let value: Option<SessionUser> = storage.get("user").unwrap();

        assert_eq!(value, Some(user));
    }

    #[test]
    fn test_get_missing_is_none() {
        let storage = Storage::new("plaready", MemoryStore::new());

        let value: Option<String> = storage.get("never_set").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_values_are_stored_as_json() {
        let backend = Arc::new(MemoryStore::new());
        let storage = Storage::new("plaready", Shared(Arc::clone(&backend)));

        storage.set("cart_total", &499.5).unwrap();

        assert_eq!(
            backend.get_item("plaready:cart_total").unwrap().as_deref(),
            Some("499.5")
        );
    }

    #[test]
    fn test_get_non_json_value_errors() {
        let backend = Arc::new(MemoryStore::new());
        backend
            .set_item("plaready:broken", "{not json".to_string())
            .unwrap();
        let storage = Storage::new("plaready", Shared(backend));

        assert!(storage.get::<String>("broken").is_err());
    }

    #[test]
    fn test_remove() {
        let storage = Storage::new("plaready", MemoryStore::new());

        storage.set("to_remove", &42i32).unwrap();
        assert!(storage.remove("to_remove").unwrap());
        assert!(storage.get::<i32>("to_remove").unwrap().is_none());
        assert!(!storage.remove("to_remove").unwrap());
    }

    #[test]
    fn test_clear_only_touches_own_namespace() {
        let backend = Arc::new(MemoryStore::new());
        backend
            .set_item("other-app:theme", "\"dark\"".to_string())
            .unwrap();
        let storage = Storage::new("plaready", Shared(Arc::clone(&backend)));

        storage.set("user", &"asha").unwrap();
        storage.set("cookie", &"session=abc").unwrap();

        assert_eq!(storage.clear().unwrap(), 2);
        assert!(storage.get::<String>("user").unwrap().is_none());
        assert_eq!(
            backend.get_item("other-app:theme").unwrap().as_deref(),
            Some("\"dark\"")
        );
    }

    #[test]
    fn test_file_store_persists_between_opens() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("session.json");

        {
            let storage = Storage::new("plaready", FileStore::open(&path).unwrap());
            storage.set("token_hint", &"abc").unwrap();
        }

        let storage = Storage::new("plaready", FileStore::open(&path).unwrap());
        let value: Option<String> = storage.get("token_hint").unwrap();
        assert_eq!(value.as_deref(), Some("abc"));
    }

    #[test]
    fn test_file_store_rejects_corrupted_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::StorageCorrupted);
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.json");
        let store = FileStore::open(&path).unwrap();
        store.set_item("plaready:user", "\"asha\"".to_string()).unwrap();

        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(store.set_item("plaready:user", "\"ravi\"".to_string()).is_err());
        assert!(store.remove_item("plaready:user").is_err());
        assert_eq!(
            store.get_item("plaready:user").unwrap().as_deref(),
            Some("\"asha\"")
        );
    }
}
