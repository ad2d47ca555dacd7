//! In-process session store.

use crate::error::StorageError;
use crate::session::SessionStore;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;

/// Session store backed by a map guarded by a `RwLock`.
///
/// Clones are independent copies; share one instance through `Arc` to let
/// several trackers see the same session.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.read().is_empty()
    }

    pub fn remove(&self, key: &str) -> Option<Value> {
        self.values.write().remove(key)
    }
}

impl Clone for MemorySessionStore {
    fn clone(&self) -> Self {
        Self {
            values: RwLock::new(self.values.read().clone()),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn has(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.values.read().contains_key(key))
    }

    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.values.write().insert(key.to_string(), value);
        Ok(())
    }
}
