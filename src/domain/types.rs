/// Core identifier types used throughout the domain layer

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a symptom record
///
/// This is a wrapper around UUID to provide type safety - a record id can't
/// be confused with the other free-text strings moving through the tool
/// layer. Ids are assigned once at creation time and never change, even
/// when the record itself is replaced by an edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub Uuid);

impl RecordId {
    /// Generate a new random record id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a record id from a string (useful when loading from storage
    /// or parsing tool arguments)
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
