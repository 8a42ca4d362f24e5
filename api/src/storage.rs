//! On-device key-value persistence for store snapshots.
//!
//! Each store persists as one JSON document under a fixed key. Native
//! targets keep one file per key under the configured data directory;
//! the web build uses the browser's localStorage. Every snapshot embeds
//! a schema version so a newer on-disk format is detected instead of
//! misread.

use std::sync::Arc;

use dioxus_logger::tracing::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::AppConfig;

/// Storage key for the session snapshot.
pub const AUTH_KEY: &str = "supernova-auth";
/// Storage key for the interaction snapshot.
pub const INTERACTIONS_KEY: &str = "supernova-interactions";

/// Version written into every snapshot. Bump when a snapshot's shape
/// changes incompatibly.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot (de)serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("browser storage unavailable: {0}")]
    Browser(String),
}

/// Minimal key-value backend the stores persist through.
///
/// No Send/Sync bound: every target runs the app, including its spawned
/// futures, on the one UI thread.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Serializes `value` and writes it under `key`.
pub fn save_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}

/// Reads and deserializes the value under `key`, if any.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Opens the platform's default backend, falling back to an in-memory
/// store (with a warning) so the app still runs without durable storage.
#[cfg(not(target_arch = "wasm32"))]
pub fn open_default(config: &AppConfig) -> Arc<dyn KeyValueStore> {
    match FileStore::open(config.data_dir.clone()) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!("cannot open data dir {:?}: {e}; state will not persist", config.data_dir);
            Arc::new(MemoryStore::new())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn open_default(_config: &AppConfig) -> Arc<dyn KeyValueStore> {
    match LocalStorage::new() {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!("browser storage unavailable: {e}; state will not persist");
            Arc::new(MemoryStore::new())
        }
    }
}

/// Volatile backend for tests and as a last-resort fallback.
#[derive(Default)]
pub struct MemoryStore {
    entries: std::sync::Mutex<std::collections::HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

/// One file per key under a data directory.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStore {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    /// Creates the directory if needed. Keys become `<dir>/<key>.json`.
    pub fn open(dir: std::path::PathBuf) -> Result<Self, StorageError> {
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Browser localStorage backend.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn new() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| StorageError::Browser("no window.localStorage".to_owned()))?;
        Ok(Self { storage })
    }

    fn js_err(e: wasm_bindgen::JsValue) -> StorageError {
        StorageError::Browser(format!("{e:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(Self::js_err)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(Self::js_err)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(Self::js_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Sample {
        schema: u32,
        label: String,
    }

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());

        let sample = Sample {
            schema: 1,
            label: "hello".to_owned(),
        };
        save_json(&store, "sample", &sample).unwrap();
        let back: Sample = load_json(&store, "sample").unwrap().unwrap();
        assert_eq!(back, sample);

        store.remove("sample").unwrap();
        assert!(store.get("sample").unwrap().is_none());
    }

    #[test]
    fn file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("data")).unwrap();

        assert!(store.get(AUTH_KEY).unwrap().is_none());
        store.set(AUTH_KEY, "{\"schema\":1}").unwrap();
        assert_eq!(store.get(AUTH_KEY).unwrap().unwrap(), "{\"schema\":1}");

        // survives reopening
        let reopened = FileStore::open(dir.path().join("data")).unwrap();
        assert_eq!(reopened.get(AUTH_KEY).unwrap().unwrap(), "{\"schema\":1}");

        reopened.remove(AUTH_KEY).unwrap();
        assert!(store.get(AUTH_KEY).unwrap().is_none());
        // removing a missing key is fine
        reopened.remove(AUTH_KEY).unwrap();
    }

    #[test]
    fn corrupt_json_is_an_error() {
        let store = MemoryStore::new();
        store.set("sample", "not json").unwrap();
        assert!(load_json::<Sample>(&store, "sample").is_err());
    }
}
