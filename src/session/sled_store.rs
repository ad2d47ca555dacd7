//! Durable sled-backed session store.
//!
//! All sessions share one sled tree. Keys are `{session_id}:{key}` so a session's
//! variables can be listed or dropped with a prefix scan.

use std::io;
use std::path::Path;

use serde_json::Value;
use sled::{Db, Tree};
use tracing::debug;

use crate::error::StorageError;
use crate::session::SessionStore;

const TREE_SESSION_VARS: &str = "session_vars";
const KEY_SEPARATOR: char = ':';

/// Owner of the sled database holding every session's variables.
#[derive(Clone)]
pub struct SessionRegistry {
    db: Db,
    vars: Tree,
}

impl SessionRegistry {
    /// Open (or create) the database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path).map_err(to_storage_io)?;
        Self::new(db)
    }

    pub fn new(db: Db) -> Result<Self, StorageError> {
        let vars = db.open_tree(TREE_SESSION_VARS).map_err(to_storage_io)?;
        Ok(Self { db, vars })
    }

    /// Store handle scoped to `session_id`.
    pub fn session(&self, session_id: &str) -> Result<SledSessionStore, StorageError> {
        if session_id.is_empty() || session_id.contains(KEY_SEPARATOR) {
            return Err(StorageError::InvalidSessionId(session_id.to_string()));
        }
        Ok(SledSessionStore {
            session_id: session_id.to_string(),
            vars: self.vars.clone(),
        })
    }

    /// Ids of every session holding at least one variable, sorted.
    pub fn list_sessions(&self) -> Result<Vec<String>, StorageError> {
        let mut out: Vec<String> = Vec::new();
        for result in self.vars.iter() {
            let (key, _) = result.map_err(to_storage_io)?;
            let key = String::from_utf8_lossy(&key);
            if let Some((session_id, _)) = key.split_once(KEY_SEPARATOR) {
                if out.last().map(String::as_str) != Some(session_id) {
                    out.push(session_id.to_string());
                }
            }
        }
        out.sort();
        out.dedup();
        Ok(out)
    }

    /// Drop every variable of `session_id`. Returns how many were removed.
    pub fn forget(&self, session_id: &str) -> Result<usize, StorageError> {
        let prefix = session_prefix(session_id);
        let keys: Vec<Vec<u8>> = self
            .vars
            .scan_prefix(prefix.as_bytes())
            .map(|r| r.map(|(k, _)| k.to_vec()).map_err(to_storage_io))
            .collect::<Result<Vec<_>, _>>()?;
        if keys.is_empty() {
            return Err(StorageError::SessionNotFound(session_id.to_string()));
        }
        let removed = keys.len();
        for key in keys {
            self.vars.remove(key).map_err(to_storage_io)?;
        }
        debug!(session_id, removed, "Session variables removed");
        Ok(removed)
    }

    pub fn flush(&self) -> Result<(), StorageError> {
        self.db.flush().map_err(to_storage_io)?;
        Ok(())
    }
}

/// Session store for one session id inside a [`SessionRegistry`].
#[derive(Clone)]
pub struct SledSessionStore {
    session_id: String,
    vars: Tree,
}

impl SledSessionStore {
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    fn key(&self, key: &str) -> String {
        format!("{}{}", session_prefix(&self.session_id), key)
    }
}

impl SessionStore for SledSessionStore {
    fn has(&self, key: &str) -> Result<bool, StorageError> {
        self.vars
            .contains_key(self.key(key).as_bytes())
            .map_err(to_storage_io)
    }

    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let Some(raw) = self
            .vars
            .get(self.key(key).as_bytes())
            .map_err(to_storage_io)?
        else {
            return Ok(None);
        };
        let parsed = serde_json::from_slice(&raw).map_err(|e| StorageError::CorruptValue {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(parsed))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let encoded = serde_json::to_vec(&value).map_err(to_storage_data)?;
        self.vars
            .insert(self.key(key).as_bytes(), encoded)
            .map_err(to_storage_io)?;
        Ok(())
    }
}

fn session_prefix(session_id: &str) -> String {
    format!("{session_id}{KEY_SEPARATOR}")
}

fn to_storage_io(err: sled::Error) -> StorageError {
    StorageError::IoError(io::Error::new(io::ErrorKind::Other, err.to_string()))
}

fn to_storage_data(err: serde_json::Error) -> StorageError {
    StorageError::IoError(io::Error::new(io::ErrorKind::InvalidData, err.to_string()))
}
