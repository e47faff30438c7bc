//! File-backed store: one JSON object per file, loaded at open, rewritten
//! atomically on every `set`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde_json::Value;
use tempfile::NamedTempFile;

use crate::errors::AppError;
use crate::store::KvStore;

pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, Value>>,
}

impl JsonFileStore {
    /// Opens the store, loading any existing file. A missing file is an
    /// empty store, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let entries = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AppError::Store(format!("corrupt store file {}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(AppError::Store(format!(
                    "cannot read store file {}: {e}",
                    path.display()
                )))
            }
        };
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    // Write-to-temp-then-rename so a crash mid-write never truncates the
    // store.
    fn persist(&self, entries: &HashMap<String, Value>) -> Result<(), AppError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let tmp = NamedTempFile::new_in(dir)
            .map_err(|e| AppError::Store(format!("cannot create temp store file: {e}")))?;
        serde_json::to_writer_pretty(&tmp, entries)
            .map_err(|e| AppError::Store(format!("cannot encode store: {e}")))?;
        tmp.persist(&self.path)
            .map_err(|e| AppError::Store(format!("cannot persist store: {e}")))?;
        Ok(())
    }
}

impl KvStore for JsonFileStore {
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
        self.persist(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("prefs.json")).unwrap();
        assert!(store.get("savedFilters").unwrap().is_none());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("favoriteOpportunities", json!(["2"])).unwrap();
        store.set("recentSearches", json!(["design"])).unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("favoriteOpportunities").unwrap(),
            Some(json!(["2"]))
        );
        assert_eq!(
            reopened.get("recentSearches").unwrap(),
            Some(json!(["design"]))
        );
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, b"not json").unwrap();
        assert!(JsonFileStore::open(&path).is_err());
    }
}
