// SPDX-FileCopyrightText: 2026 Astrodeck Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! State store implementations for registry persistence.
//!
//! [`JsonFileStore`] keeps one `<key>.json` document per key in a directory
//! and is what the CLI host uses. [`MemoryStore`] backs tests and embedders
//! that persist elsewhere.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use astrodeck_core::{AstrodeckError, StateStore};

/// Directory-backed store writing one JSON file per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the document for `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StateStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>, AstrodeckError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AstrodeckError::storage(e)),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), AstrodeckError> {
        std::fs::create_dir_all(&self.dir).map_err(AstrodeckError::storage)?;

        // Readers never observe a partially written document.
        let target = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        std::fs::write(&tmp, value).map_err(AstrodeckError::storage)?;
        std::fs::rename(&tmp, &target).map_err(AstrodeckError::storage)?;
        Ok(())
    }
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `value` under `key`.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.into(), value.into());
        store
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, AstrodeckError> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), AstrodeckError> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_missing_key_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(tmp.path());
        assert_eq!(store.load("plugin-store").unwrap(), None);
    }

    #[test]
    fn file_store_save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(tmp.path().join("nested"));

        store.save("plugin-store", r#"{"plugins":[]}"#).unwrap();
        assert_eq!(
            store.load("plugin-store").unwrap().as_deref(),
            Some(r#"{"plugins":[]}"#)
        );
        assert!(store.path_for("plugin-store").exists());
        assert!(!tmp.path().join("nested/.plugin-store.json.tmp").exists());
    }

    #[test]
    fn file_store_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(tmp.path());
        store.save("k", "one").unwrap();
        store.save("k", "two").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn file_store_unreadable_path_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        // A directory where the document should be.
        std::fs::create_dir(tmp.path().join("k.json")).unwrap();
        let store = JsonFileStore::new(tmp.path());
        assert!(matches!(
            store.load("k"),
            Err(AstrodeckError::Storage { .. })
        ));
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::with_value("a", "1");
        assert_eq!(store.load("a").unwrap().as_deref(), Some("1"));
        store.save("b", "2").unwrap();
        assert_eq!(store.load("b").unwrap().as_deref(), Some("2"));
        assert_eq!(store.load("c").unwrap(), None);
    }
}
