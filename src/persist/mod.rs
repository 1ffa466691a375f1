//! Single-slot string persistence.
//!
//! The only persisted value is the active search term, stored as a raw
//! string under [`SEARCH_TERM_KEY`]. It is read once when the session is
//! built and written back on every change.

use crate::model::StoreError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Storage key of the active search term.
pub const SEARCH_TERM_KEY: &str = "search";

/// String key-value storage.
pub trait KeyValueStore: Send + Sync {
    /// Stored value, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

// ===== FileStore =====

/// One file per key inside a directory. File contents are the raw value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding one file per key.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(self.dir.join(key))
        } else {
            Err(StoreError::InvalidKey(key.to_string()))
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::Write {
            path: self.dir.clone(),
            source,
        })?;
        std::fs::write(&path, value).map_err(|source| StoreError::Write { path, source })
    }
}

// ===== MemoryStore =====

/// In-process storage for tests and `--ephemeral` runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single `key` = `value` entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

// ===== PersistedValue =====

/// A string mirrored into a [`KeyValueStore`] slot.
///
/// Loaded once on construction (falling back to a default when the slot is
/// missing or holds only whitespace), then written through whenever it
/// changes.
pub struct PersistedValue {
    store: Box<dyn KeyValueStore>,
    key: String,
    value: String,
}

impl PersistedValue {
    /// Read `key` from `store`, using `default` if the slot is missing or blank.
    ///
    /// The default is not written back; storage is only touched by [`set`](Self::set).
    pub fn load(
        store: Box<dyn KeyValueStore>,
        key: impl Into<String>,
        default: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let key = key.into();
        let value = match store.get(&key)? {
            Some(stored) if !stored.trim().is_empty() => stored,
            _ => default.into(),
        };
        debug!(key = %key, value = %value, "Persisted value loaded");
        Ok(Self { store, key, value })
    }

    /// Current value.
    pub fn get(&self) -> &str {
        &self.value
    }

    /// Replace the value, writing it to storage if it differs.
    ///
    /// On a storage failure the in-memory value is left unchanged.
    pub fn set(&mut self, value: impl Into<String>) -> Result<(), StoreError> {
        let value = value.into();
        if value == self.value {
            return Ok(());
        }
        self.store.set(&self.key, &value)?;
        self.value = value;
        Ok(())
    }
}

impl std::fmt::Debug for PersistedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistedValue")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
