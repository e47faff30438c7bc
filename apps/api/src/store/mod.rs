//! Preference store — the string-keyed JSON store behind user state
//! (favorites, applications, saved filters, recent searches, uploads).
//!
//! Values are whole JSON blobs: read at open, overwritten wholesale on
//! every mutation. There is no schema versioning.

pub mod file;
pub mod handlers;
pub mod prefs;

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;

use crate::errors::AppError;

/// The storage seam. Carried in `Preferences` as `Arc<dyn KvStore>`;
/// implementations must be safe for concurrent readers.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Value>, AppError>;
    fn set(&self, key: &str, value: Value) -> Result<(), AppError>;
}

/// Process-local store. State vanishes on restart; the default when no
/// store path is configured.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, AppError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AppError::Store("store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), AppError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppError::Store("store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}
