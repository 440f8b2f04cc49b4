//! Key-value store backends
//!
//! Every persisted collection lives under a single key and is replaced
//! wholesale on write.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use serde_json::Value;

use crate::error::{GraceError, GraceResult};

use super::file_io::{read_json, write_json_atomic};

/// Synchronous, process-local store of JSON documents keyed by name
pub trait KeyValueStore: Send + Sync {
    /// Fetch the document stored under `key`, if any
    fn get(&self, key: &str) -> GraceResult<Option<Value>>;

    /// Replace the document stored under `key`
    fn set(&self, key: &str, value: Value) -> GraceResult<()>;
}

/// One `<key>.json` file per key inside a directory
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> GraceResult<Option<Value>> {
        read_json(self.path_for(key))
    }

    fn set(&self, key: &str, value: Value) -> GraceResult<()> {
        write_json_atomic(self.path_for(key), &value)
    }
}

/// Volatile store, used by tests and dry runs
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> GraceResult<Option<Value>> {
        let data = self
            .data
            .read()
            .map_err(|e| GraceError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> GraceResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GraceError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf());

        assert_eq!(store.get("shoppingList").unwrap(), None);

        store.set("shoppingList", json!([{"name": "Milk"}])).unwrap();
        assert!(temp_dir.path().join("shoppingList.json").exists());

        let reopened = JsonFileStore::new(temp_dir.path().to_path_buf());
        assert_eq!(
            reopened.get("shoppingList").unwrap(),
            Some(json!([{"name": "Milk"}]))
        );
    }

    #[test]
    fn test_memory_store_replaces_wholesale() {
        let store = MemoryStore::new();
        store.set("k", json!([1, 2, 3])).unwrap();
        store.set("k", json!([4])).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(json!([4])));
        assert_eq!(store.get("other").unwrap(), None);
    }
}
