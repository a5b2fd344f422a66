/// SymptomRecord entity
///
/// This module defines the SymptomRecord struct that represents one
/// user-reported symptom occurrence, plus the serde glue that keeps the
/// persisted form on the documented wire format (camelCase keys, dates as
/// YYYY-MM-DD, times as HH:MM).

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::RecordId;

/// One user-reported symptom occurrence
///
/// Records are immutable value objects. Editing a log entry builds a new
/// record carrying the old id and replaces the stored one wholesale; nothing
/// mutates a field in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomRecord {
    /// Unique identifier, assigned at creation and immutable afterwards
    pub id: RecordId,
    /// Free-text symptom label (e.g. "Headache", "Fatigue")
    ///
    /// Names are never normalized or deduplicated: "headache" and
    /// "Headache" are distinct symptoms as far as the store and the
    /// aggregations are concerned.
    pub symptom_name: String,
    /// Calendar date the symptom was experienced (local-date semantics,
    /// no time zone handling)
    pub date: NaiveDate,
    /// Optional clock time, independent of `date`
    #[serde(default, skip_serializing_if = "Option::is_none", with = "hhmm")]
    pub time: Option<NaiveTime>,
    /// Severity on the fixed 0-10 scale
    pub intensity: u8,
    /// Optional free-text context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Suspected trigger labels (e.g. "Stress", "Lack of sleep")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<String>,
    /// Labels for what brought relief (e.g. "Painkiller", "Rest")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relief_measures: Vec<String>,
}

impl SymptomRecord {
    /// Rebuild a record from already-validated parts
    ///
    /// This constructor assumes the data was validated when it was first
    /// created and is mainly used by the storage layer when loading the
    /// persisted collection.
    #[allow(clippy::too_many_arguments)]
    pub fn from_existing(
        id: RecordId,
        symptom_name: String,
        date: NaiveDate,
        time: Option<NaiveTime>,
        intensity: u8,
        notes: Option<String>,
        triggers: Vec<String>,
        relief_measures: Vec<String>,
    ) -> Self {
        Self {
            id,
            symptom_name,
            date,
            time,
            intensity,
            notes,
            triggers,
            relief_measures,
        }
    }

    /// Check if this record carries any notes text
    pub fn has_notes(&self) -> bool {
        self.notes
            .as_ref()
            .map(|n| !n.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Serde helpers for the `HH:MM` wire form of `time`
///
/// chrono's default NaiveTime representation carries seconds and fractional
/// seconds; the persisted format stores minutes only.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&t.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => NaiveTime::parse_from_str(&s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
