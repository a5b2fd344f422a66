/// The symptom store: authoritative in-memory collection plus write-back
///
/// The store owns the live Vec of records. The persistence slot is a
/// passive mirror: it is read once at startup and rewritten in full after
/// every mutation. On any conflict the in-memory state wins - a failed
/// write never rolls a mutation back, and a corrupt read never crashes the
/// session, it just starts the collection empty.

use crate::domain::{RecordId, SymptomInput, SymptomRecord};
use crate::storage::{PersistenceSlot, StorageError, StoreError};

pub struct SymptomStore {
    /// Insertion order is load-bearing: it is the tie-break the
    /// aggregations fall back to for same-day entries and equal counts.
    records: Vec<SymptomRecord>,
    slot: Box<dyn PersistenceSlot + Send>,
    unsaved_changes: bool,
}

impl SymptomStore {
    /// Create a store over a slot and load whatever the slot holds
    ///
    /// This never fails: an unreadable or corrupt payload is logged and
    /// the store starts empty instead.
    pub fn load(slot: Box<dyn PersistenceSlot + Send>) -> Self {
        let records = match read_snapshot(slot.as_ref()) {
            Ok(records) => {
                tracing::debug!("loaded {} symptom records", records.len());
                records
            }
            Err(e) => {
                tracing::warn!("could not load persisted symptom data, starting empty: {}", e);
                Vec::new()
            }
        };

        Self {
            records,
            slot,
            unsaved_changes: false,
        }
    }

    /// All records, in insertion order (callers sort as needed)
    pub fn list(&self) -> &[SymptomRecord] {
        &self.records
    }

    pub fn get(&self, id: &RecordId) -> Option<&SymptomRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate input, append a fresh record and write the collection back
    pub fn create(&mut self, input: SymptomInput) -> Result<SymptomRecord, StoreError> {
        let record = input.into_record()?;
        self.records.push(record.clone());
        self.persist();

        tracing::debug!("created symptom record {} ({})", record.id, record.symptom_name);
        Ok(record)
    }

    /// Replace the record at `id` with a freshly validated one
    ///
    /// The id is preserved; every other field comes from the input. Fails
    /// with NotFound before validation runs if the id is absent.
    pub fn update(&mut self, id: &RecordId, input: SymptomInput) -> Result<SymptomRecord, StoreError> {
        let position = self
            .records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        let record = input.into_record_with_id(id.clone())?;
        self.records[position] = record.clone();
        self.persist();

        tracing::debug!("updated symptom record {}", record.id);
        Ok(record)
    }

    /// Remove the record at `id` and write the remaining collection back
    pub fn delete(&mut self, id: &RecordId) -> Result<(), StoreError> {
        let position = self
            .records
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        self.records.remove(position);
        self.persist();

        tracing::debug!("deleted symptom record {}", id);
        Ok(())
    }

    /// Whether the last write-back failed, leaving memory ahead of the slot
    ///
    /// Callers surface this as a non-fatal warning: the session keeps the
    /// user's data, but it may not survive a restart.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    /// Write the full collection to the slot as one document
    fn persist(&mut self) {
        let payload = match serde_json::to_string(&self.records) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("could not serialize symptom records: {}", e);
                self.unsaved_changes = true;
                return;
            }
        };

        match self.slot.write(&payload) {
            Ok(()) => self.unsaved_changes = false,
            Err(e) => {
                tracing::warn!("could not persist symptom records, keeping in-memory state: {}", e);
                self.unsaved_changes = true;
            }
        }
    }
}

/// Read and parse the persisted document; the caller decides how to degrade
fn read_snapshot(slot: &(dyn PersistenceSlot + Send)) -> Result<Vec<SymptomRecord>, StorageError> {
    match slot.read()? {
        Some(payload) => Ok(serde_json::from_str(&payload)?),
        None => Ok(Vec::new()),
    }
}
