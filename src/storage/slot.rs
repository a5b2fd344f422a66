/// Persistence slot implementations
///
/// FileSlot keeps the serialized collection in a single JSON file, playing
/// the role browser local storage played for the original log. MemorySlot
/// is the in-process fake used by tests and ephemeral runs.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::storage::{PersistenceSlot, StorageError};

/// File-backed slot: one JSON document at a fixed path
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PersistenceSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn write(&mut self, payload: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, payload)?;
        tracing::debug!("wrote {} bytes to {}", payload.len(), self.path.display());
        Ok(())
    }
}

/// In-memory slot for tests
///
/// Clones share the same cell, so a test can hand one clone to a store and
/// keep another to observe what got written or to reload from it later.
#[derive(Clone, Default)]
pub struct MemorySlot {
    payload: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-seeded with a payload, as if a previous session
    /// had written it
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Arc::new(Mutex::new(Some(payload.into()))),
        }
    }
}

impl PersistenceSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.payload.lock().expect("slot lock poisoned").clone())
    }

    fn write(&mut self, payload: &str) -> Result<(), StorageError> {
        *self.payload.lock().expect("slot lock poisoned") = Some(payload.to_string());
        Ok(())
    }
}
