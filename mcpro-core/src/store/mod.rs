//! Persisted key-value store.
//!
//! Each logical value lives under its own string key as a JSON document.
//! Reads are best-effort: a missing or unparsable value yields the caller's
//! default. Writes replace the whole value.

mod file;
mod ids;
mod memory;
mod record_set;

pub use file::FileStorage;
pub use ids::next_id;
pub use memory::MemoryStorage;
pub use record_set::{Record, RecordSet};

use std::path::Path;
use std::rc::Rc;

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{McProError, McProResult};

/// A durable, synchronous, string-keyed map of raw text values.
pub trait Storage {
    /// Raw value under `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Replace the value under `key`.
    fn set(&self, key: &str, raw: &str) -> McProResult<()>;

    /// Delete the value under `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> McProResult<()>;
}

/// JSON (de)serialization on top of a [`Storage`] medium.
///
/// Cloning is cheap; clones share the same medium.
#[derive(Clone)]
pub struct PersistedStore {
    storage: Rc<dyn Storage>,
}

impl PersistedStore {
    pub fn new(storage: impl Storage + 'static) -> Self {
        PersistedStore {
            storage: Rc::new(storage),
        }
    }

    /// Store backed by one JSON file per key under `dir`.
    pub fn open_dir(dir: &Path) -> McProResult<Self> {
        Ok(Self::new(FileStorage::open(dir)?))
    }

    /// Store backed by process memory only.
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::default())
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Read the value under `key`, falling back to `default` when the key is
    /// absent or its contents do not parse as `T`. Nothing is written.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.storage.get(key) else {
            debug!("event=store_load key={key} status=absent");
            return default;
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("event=store_load key={key} status=corrupt error=\"{e}\"");
                default
            }
        }
    }

    /// Serialize `value` and replace whatever is stored under `key`.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> McProResult<()> {
        let raw =
            serde_json::to_string(value).map_err(|e| McProError::Serialization(e.to_string()))?;

        self.storage.set(key, &raw).inspect_err(|e| {
            warn!("event=store_save key={key} status=failed error=\"{e}\"");
        })?;

        debug!("event=store_save key={key} status=ok bytes={}", raw.len());
        Ok(())
    }

    pub fn remove(&self, key: &str) -> McProResult<()> {
        self.storage.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        id: i64,
        label: String,
    }

    fn sample(id: i64, label: &str) -> Sample {
        Sample {
            id,
            label: label.to_string(),
        }
    }

    #[test]
    fn test_absent_key_returns_default_without_writing() {
        let store = PersistedStore::in_memory();

        let loaded: Vec<Sample> = store.load("mc_missing", Vec::new());

        assert!(loaded.is_empty());
        assert!(store.storage().get("mc_missing").is_none());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let store = PersistedStore::in_memory();
        let value = vec![sample(1, "uno"), sample(2, "dos")];

        store.save("mc_samples", &value).unwrap();
        let loaded: Vec<Sample> = store.load("mc_samples", Vec::new());

        assert_eq!(loaded, value);
    }

    #[test]
    fn test_corrupt_value_returns_default() {
        let store = PersistedStore::in_memory();
        store.storage().set("mc_samples", "[{\"id\": 1,").unwrap();

        let loaded: Vec<Sample> = store.load("mc_samples", vec![sample(9, "d")]);

        assert_eq!(loaded, vec![sample(9, "d")]);
        // The corrupt value is left alone until the next save.
        assert_eq!(
            store.storage().get("mc_samples").as_deref(),
            Some("[{\"id\": 1,")
        );
    }

    #[test]
    fn test_wrong_shape_returns_default() {
        let store = PersistedStore::in_memory();
        store.save("mc_dark_mode", &"yes").unwrap();

        assert!(!store.load("mc_dark_mode", false));
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let store = PersistedStore::in_memory();
        let mut notes = BTreeMap::new();
        notes.insert("2026-01-01".to_string(), "feriado".to_string());
        store.save("mc_notas", &notes).unwrap();

        store.save("mc_notas", &BTreeMap::<String, String>::new()).unwrap();
        let loaded: BTreeMap<String, String> = store.load("mc_notas", notes.clone());

        assert!(loaded.is_empty());
    }

    #[test]
    fn test_clones_share_storage() {
        let store = PersistedStore::in_memory();
        let other = store.clone();

        store.save("mc_dark_mode", &true).unwrap();

        assert!(other.load("mc_dark_mode", false));
    }
}
