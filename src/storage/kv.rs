//! Persisted Key-Value Slots
//!
//! The local store persists through two named slots (the serialized todo
//! list and the next-id counter). Implementations can use files, an
//! in-memory map, etc.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Abstract key-value storage medium
///
/// Treated as always available but fallible: an absent key on first run is
/// normal and yields `None`.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, if any
    fn read(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn write(&self, key: &str, value: &str) -> DomainResult<()>;
}

/// File-backed storage: one file per key under a data directory
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for FileStorage {
    fn read(&self, key: &str) -> DomainResult<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::error!("failed to read storage slot {}: {}", key, e);
                Err(DomainError::Storage(format!("failed to read slot {}", key)))
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> DomainResult<()> {
        if let Err(e) = std::fs::create_dir_all(&self.dir) {
            log::error!("failed to create storage dir {:?}: {}", self.dir, e);
            return Err(DomainError::Storage(format!(
                "failed to write slot {}",
                key
            )));
        }
        match std::fs::write(self.slot_path(key), value) {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("failed to write storage slot {}: {}", key, e);
                Err(DomainError::Storage(format!("failed to write slot {}", key)))
            }
        }
    }
}

/// In-memory storage for tests and embedding
#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> DomainResult<Option<String>> {
        let slots = self.slots.lock().expect("storage mutex poisoned");
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> DomainResult<()> {
        let mut slots = self.slots.lock().expect("storage mutex poisoned");
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
