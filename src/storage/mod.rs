/// Storage layer for the symptom collection
///
/// This module defines the persistence port (a slot holding one serialized
/// document), its file-backed and in-memory implementations, and the
/// SymptomStore that owns the authoritative in-memory collection.

pub mod slot;
pub mod store;

// Re-export the main storage types
pub use slot::*;
pub use store::*;

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur reading or writing the persistence slot
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to access persistence slot: {0}")]
    Io(#[from] std::io::Error),

    #[error("persisted payload is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors surfaced by store operations
///
/// Persistence failures are deliberately absent: a failed write-back is
/// logged and flagged rather than returned (the in-memory collection stays
/// the source of truth), and a corrupt read degrades to an empty collection
/// instead of propagating.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] DomainError),

    #[error("no symptom record with id {id}")]
    NotFound { id: String },
}

/// Trait defining the persistence port the store writes through
///
/// The slot holds a single opaque document - the serialized record array -
/// under one fixed location. There are no partial writes; every mutation
/// replaces the whole document. The trait exists so tests can substitute an
/// in-memory fake for the real data file.
pub trait PersistenceSlot {
    /// Read the current document, or None if nothing has been written yet
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the document wholesale
    fn write(&mut self, payload: &str) -> Result<(), StorageError>;
}
