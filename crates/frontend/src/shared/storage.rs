//! Key-value persistence for table screens
//!
//! Selection sets and per-row overrides live in browser `localStorage`,
//! shared by every table instance of the same browser profile. Both stores
//! re-read the stored value before each write and change only the ids they
//! were asked to touch, so two writers merge per id instead of clobbering
//! each other.

use crate::shared::error::TableError;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, TableError>;
    fn set(&self, key: &str, value: &str) -> Result<(), TableError>;
    fn remove(&self, key: &str) -> Result<(), TableError>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, TableError> {
        web_sys::window()
            .ok_or_else(|| TableError::Storage("window is not available".into()))?
            .local_storage()
            .map_err(|e| TableError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| TableError::Storage("localStorage is disabled".into()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, TableError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| TableError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), TableError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| TableError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), TableError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| TableError::Storage(format!("{:?}", e)))
    }
}

/// In-process store for tests and for browsers with storage disabled
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, TableError> {
        self.entries
            .lock()
            .map_err(|_| TableError::Storage("memory store poisoned".into()))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, TableError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), TableError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), TableError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// Browser storage when available, otherwise an in-memory fallback.
pub fn default_store() -> Arc<dyn KeyValueStore> {
    if BrowserStorage::storage().is_ok() {
        Arc::new(BrowserStorage)
    } else {
        log::warn!("localStorage unavailable, selection will not survive reload");
        Arc::new(MemoryStore::new())
    }
}

fn read_json<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match store.get(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("discarding unreadable value under '{}': {}", key, e);
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            log::warn!("{}", e);
            T::default()
        }
    }
}

fn write_json<T: serde::Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), TableError> {
    let raw = serde_json::to_string(value).map_err(|e| TableError::Storage(e.to_string()))?;
    store.set(key, &raw)
}

/// Persisted set of selected row ids (JSON array)
#[derive(Clone)]
pub struct SelectionStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl SelectionStore {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn load(&self) -> BTreeSet<String> {
        read_json(self.store.as_ref(), &self.key)
    }

    /// Sets membership of `ids` and returns the merged persisted set.
    pub fn set_many<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a str>,
        selected: bool,
    ) -> Result<BTreeSet<String>, TableError> {
        let mut current = self.load();
        for id in ids {
            if selected {
                current.insert(id.to_string());
            } else {
                current.remove(id);
            }
        }
        write_json(self.store.as_ref(), &self.key, &current)?;
        Ok(current)
    }

    /// Flips one id against the latest persisted set.
    pub fn toggle(&self, id: &str) -> Result<BTreeSet<String>, TableError> {
        let selected = !self.load().contains(id);
        self.set_many([id], selected)
    }

    pub fn clear(&self) -> Result<(), TableError> {
        self.store.remove(&self.key)
    }
}

/// row id → field → value
pub type OverrideMap = BTreeMap<String, Map<String, Value>>;

/// Persisted per-row field overrides (JSON object). Unbounded, cleared only by `reset`.
#[derive(Clone)]
pub struct OverrideStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl OverrideStore {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn load(&self) -> OverrideMap {
        read_json(self.store.as_ref(), &self.key)
    }

    /// Merges one field of one row into the stored map.
    pub fn set(&self, id: &str, field: &str, value: Value) -> Result<OverrideMap, TableError> {
        let mut current = self.load();
        current
            .entry(id.to_string())
            .or_default()
            .insert(field.to_string(), value);
        write_json(self.store.as_ref(), &self.key, &current)?;
        Ok(current)
    }

    pub fn reset(&self) -> Result<(), TableError> {
        self.store.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shared() -> Arc<dyn KeyValueStore> {
        Arc::new(MemoryStore::new())
    }

    #[test]
    fn test_selection_toggle_persists() {
        let store = shared();
        let sel = SelectionStore::new(store.clone(), "t_selection_v1");
        sel.toggle("a").unwrap();
        sel.toggle("b").unwrap();
        sel.toggle("a").unwrap();
        assert_eq!(sel.load().into_iter().collect::<Vec<_>>(), vec!["b"]);
        assert_eq!(store.get("t_selection_v1").unwrap().unwrap(), r#"["b"]"#);
    }

    #[test]
    fn test_two_writers_merge_by_id() {
        let store = shared();
        let first = SelectionStore::new(store.clone(), "k");
        let second = SelectionStore::new(store.clone(), "k");
        first.toggle("1").unwrap();
        second.toggle("2").unwrap();
        let merged = first.toggle("3").unwrap();
        assert_eq!(merged.len(), 3);
        second.set_many(["1", "3"], false).unwrap();
        assert_eq!(first.load().into_iter().collect::<Vec<_>>(), vec!["2"]);
    }

    #[test]
    fn test_unreadable_value_is_ignored() {
        let store = shared();
        store.set("k", "not json").unwrap();
        let sel = SelectionStore::new(store, "k");
        assert!(sel.load().is_empty());
        sel.toggle("x").unwrap();
        assert!(sel.load().contains("x"));
    }

    #[test]
    fn test_overrides_merge_and_reset() {
        let store = shared();
        let overrides = OverrideStore::new(store.clone(), "o");
        overrides.set("10", "to_order", json!(5)).unwrap();
        OverrideStore::new(store.clone(), "o")
            .set("11", "to_order", json!(7))
            .unwrap();
        let map = overrides.set("10", "note", json!("urgent")).unwrap();
        assert_eq!(map["10"]["to_order"], json!(5));
        assert_eq!(map["10"]["note"], json!("urgent"));
        assert_eq!(map["11"]["to_order"], json!(7));

        overrides.reset().unwrap();
        assert!(overrides.load().is_empty());
    }
}
