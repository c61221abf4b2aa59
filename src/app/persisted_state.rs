// SPDX-License-Identifier: MPL-2.0
//! Key-value state persisted across sessions in CBOR.
//!
//! Components that remember UI state (the sidebar, for example) store it here
//! under a key of their choosing. The store is kept apart from the
//! user-editable `settings.toml` and written to `state.cbor` in the data
//! directory.
//!
//! # Path Resolution
//!
//! 1. `load_from()` with an explicit directory
//! 2. `--data-dir` on the command line
//! 3. `GRIMOIRE_DATA_DIR` environment variable
//! 4. Platform-specific data directory

use super::paths;
use crate::error::{Error, Result};
use ciborium::Value;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::warn;

/// State file name within the app data directory.
pub const STATE_FILE: &str = "state.cbor";

/// In-memory copy of `state.cbor`.
///
/// Values are kept as raw CBOR so that an entry written by one component is
/// never decoded by another; each caller picks its own type on [`get`](Self::get).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, Value>,
}

impl StateStore {
    /// A store with no backing file; `save` is a no-op.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads the store from the default location.
    ///
    /// Returns `(store, warning)`. A missing file yields an empty store; an
    /// unreadable one yields an empty store plus a warning.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let path = paths::get_app_data_dir_with_override(base_dir).map(|dir| dir.join(STATE_FILE));
        let Some(path) = path else {
            return (Self::default(), None);
        };

        let mut store = Self {
            path: Some(path.clone()),
            entries: BTreeMap::new(),
        };
        if !path.exists() {
            return (store, None);
        }

        match read_entries(&path) {
            Ok(entries) => {
                store.entries = entries;
                (store, None)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring unreadable state file");
                (store, Some(format!("Could not read saved state: {err}")))
            }
        }
    }

    /// Writes the store back to the file it was loaded from.
    ///
    /// Returns a warning instead of failing.
    pub fn save(&self) -> Option<String> {
        let path = self.path.as_deref()?;
        match write_entries(path, &self.entries) {
            Ok(()) => None,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to save state");
                Some(format!("Could not save state: {err}"))
            }
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Decodes the entry stored under `key`.
    ///
    /// `Ok(None)` when nothing is stored; `Err` when the entry does not have
    /// the requested shape.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.entries
            .get(key)
            .map(|value| value.deserialized::<T>().map_err(Error::from))
            .transpose()
    }

    pub fn set<T: Serialize>(&mut self, key: impl Into<String>, value: &T) -> Result<()> {
        let value = Value::serialized(value)?;
        self.entries.insert(key.into(), value);
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, Value>> {
    let reader = BufReader::new(fs::File::open(path)?);
    ciborium::from_reader(reader).map_err(|err| Error::State(err.to_string()))
}

fn write_entries(path: &Path, entries: &BTreeMap<String, Value>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(fs::File::create(path)?);
    ciborium::into_writer(entries, writer).map_err(|err| Error::State(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Panel {
        open: bool,
        width: u32,
    }

    #[test]
    fn missing_file_yields_empty_store() {
        let dir = tempdir().expect("temp dir");
        let (store, warning) = StateStore::load_from(Some(dir.path().to_path_buf()));
        assert!(store.is_empty());
        assert!(warning.is_none());
        assert_eq!(store.path(), Some(dir.path().join(STATE_FILE).as_path()));
    }

    #[test]
    fn entries_survive_save_and_load() {
        let dir = tempdir().expect("temp dir");
        let base = dir.path().join("nested");
        let (mut store, _) = StateStore::load_from(Some(base.clone()));
        store
            .set("panel", &Panel { open: true, width: 240 })
            .expect("serialize");
        assert!(store.save().is_none());

        let (reloaded, warning) = StateStore::load_from(Some(base));
        assert!(warning.is_none());
        assert_eq!(
            reloaded.get::<Panel>("panel").expect("decode"),
            Some(Panel { open: true, width: 240 })
        );
    }

    #[test]
    fn corrupted_file_warns_and_starts_empty() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(STATE_FILE), [0xff_u8, 0xfe, 0x00]).expect("write");

        let (store, warning) = StateStore::load_from(Some(dir.path().to_path_buf()));
        assert!(store.is_empty());
        assert!(warning.is_some());
    }

    #[test]
    fn wrong_shape_is_an_error_not_a_panic() {
        let mut store = StateStore::in_memory();
        store.set("panel", &"just a string").expect("serialize");
        let err = store.get::<Panel>("panel").expect_err("shape mismatch");
        assert!(matches!(err, Error::State(_)));
    }

    #[test]
    fn keys_are_independent() {
        let mut store = StateStore::in_memory();
        store.set("a", &1u8).expect("serialize");
        assert_eq!(store.get::<u8>("b").expect("decode"), None);
        assert!(store.remove("a"));
        assert!(!store.contains("a"));
    }

    #[test]
    fn in_memory_save_is_silent() {
        let mut store = StateStore::in_memory();
        store.set("k", &true).expect("serialize");
        assert!(store.save().is_none());
    }
}
