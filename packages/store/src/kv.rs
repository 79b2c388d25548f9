//! # Key-value bridge over persistent string storage
//!
//! [`KeyValueStore`] is the raw string interface (the browser's
//! `localStorage` on web, a hash map elsewhere). [`KvBridge`] wraps a backend
//! with JSON encoding: values are serialised on write and parsed on read.
//!
//! A stored value that does not parse as the requested type reads as absent;
//! the failure is logged at `warn` level and never propagated.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

/// Raw persistent string storage.
pub trait KeyValueStore: Send + Sync {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// JSON bridge over a [`KeyValueStore`].
#[derive(Clone)]
pub struct KvBridge {
    backend: Arc<dyn KeyValueStore>,
}

impl KvBridge {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Read and parse `key`. Missing, unreadable and malformed values are all `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get_raw(key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Failed to read {key}: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring malformed value under {key}: {e}");
                None
            }
        }
    }

    /// Serialise `value` as JSON and store it under `key`.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let result = serde_json::to_string(value)
            .map_err(StorageError::from)
            .and_then(|raw| self.backend.set_raw(key, &raw));
        if let Err(e) = result {
            tracing::warn!("Failed to write {key}: {e}");
        }
    }

    /// Whether anything at all is stored under `key`, parseable or not.
    pub fn contains(&self, key: &str) -> bool {
        matches!(self.backend.get_raw(key), Ok(Some(_)))
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.backend.remove(key) {
            tracing::warn!("Failed to remove {key}: {e}");
        }
    }
}

/// In-memory key-value store for tests and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Backend("memory store poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// `window.localStorage`-backed store for the web platform.
///
/// Zero-size: the storage handle is looked up on every call, so a page where
/// storage is disabled degrades to [`StorageError::Unavailable`].
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable("no window"))?
            .local_storage()
            .map_err(|e| StorageError::Backend(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable("localStorage disabled"))
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl KeyValueStore for LocalStorage {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Profile {
        email: String,
        full_name: String,
    }

    fn bridge() -> (MemoryKeyValueStore, KvBridge) {
        let backend = MemoryKeyValueStore::new();
        (backend.clone(), KvBridge::new(Arc::new(backend)))
    }

    #[test]
    fn test_set_then_get_decodes_json() {
        let (backend, kv) = bridge();
        let profile = Profile {
            email: "a@b.pl".to_string(),
            full_name: "Ala".to_string(),
        };
        kv.set("profile", &profile);

        assert_eq!(
            backend.get_raw("profile").unwrap().as_deref(),
            Some(r#"{"email":"a@b.pl","full_name":"Ala"}"#)
        );
        assert_eq!(kv.get::<Profile>("profile"), Some(profile));
    }

    #[test]
    fn test_missing_key_is_none() {
        let (_, kv) = bridge();
        assert_eq!(kv.get::<String>("nope"), None);
        assert!(!kv.contains("nope"));
    }

    #[test]
    fn test_malformed_value_reads_as_absent() {
        let (backend, kv) = bridge();
        backend.set_raw("token", "not json {").unwrap();

        assert_eq!(kv.get::<String>("token"), None);
        assert!(kv.contains("token"));
    }

    #[test]
    fn test_remove() {
        let (_, kv) = bridge();
        kv.set("token", "abc");
        assert_eq!(kv.get::<String>("token").as_deref(), Some("abc"));

        kv.remove("token");
        assert_eq!(kv.get::<String>("token"), None);
    }
}
