//! Session Store
//!
//! Per-user key-value storage that survives across requests of one logical session.
//! Values are JSON documents; typed access goes through [`read_value`] and
//! [`write_value`].

pub mod memory;
pub mod sled_store;

pub use memory::MemorySessionStore;
pub use sled_store::{SessionRegistry, SledSessionStore};

use crate::error::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Session store interface
///
/// Implementations are scoped to a single user session. Writes are last-writer-wins;
/// no compare-and-swap is offered.
pub trait SessionStore {
    fn has(&self, key: &str) -> Result<bool, StorageError>;
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;
    fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
    fn has(&self, key: &str) -> Result<bool, StorageError> {
        (**self).has(key)
    }

    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Read and decode the value stored under `key`.
pub fn read_value<T, S>(store: &S, key: &str) -> Result<Option<T>, StorageError>
where
    T: DeserializeOwned,
    S: SessionStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    let parsed = serde_json::from_value(raw).map_err(|e| StorageError::CorruptValue {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    Ok(Some(parsed))
}

/// Encode `value` and store it under `key`.
pub fn write_value<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: SessionStore + ?Sized,
{
    let encoded = serde_json::to_value(value).map_err(|e| StorageError::CorruptValue {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.set(key, encoded)
}
