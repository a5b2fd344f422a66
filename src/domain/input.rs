/// Raw symptom input and its validation rules
///
/// This module defines the SymptomInput struct - the shape of what a user
/// actually submits (strings, a possibly out-of-range intensity number,
/// comma-delimited label lists) - and the validation that turns it into a
/// SymptomRecord or fails naming the offending field.

use chrono::{Datelike, Local, NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::domain::{DomainError, RecordId, SymptomRecord};

/// Earliest calendar year a symptom can be logged for
const MIN_YEAR: i32 = 1900;

/// Maximum accepted lengths for the free-text fields
const MAX_NAME_LEN: usize = 100;
const MAX_NOTES_LEN: usize = 500;
const MAX_LABEL_LEN: usize = 100;

/// Raw user input for creating or replacing a symptom record
///
/// Intensity is carried as a plain i64 so out-of-range submissions (-1, 11)
/// are representable and can be rejected with a proper message instead of
/// failing at the integer conversion. Triggers and relief measures arrive
/// as single comma-delimited strings, the way the entry form collects them.
#[derive(Debug, Clone, Deserialize)]
pub struct SymptomInput {
    pub symptom_name: String,
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
    /// Optional clock time as `HH:MM`
    pub time: Option<String>,
    pub intensity: i64,
    pub notes: Option<String>,
    /// Comma-delimited trigger labels, e.g. "Stress, Lack of sleep"
    pub triggers: Option<String>,
    /// Comma-delimited relief labels, e.g. "Painkiller, Rest"
    pub relief_measures: Option<String>,
}

impl SymptomInput {
    /// Validate this input and build a fresh record with a new id
    pub fn into_record(self) -> Result<SymptomRecord, DomainError> {
        self.into_record_with_id(RecordId::new())
    }

    /// Validate this input and build a record keeping an existing id
    ///
    /// Used by the update path: the replacement record goes through exactly
    /// the same validation as a new one, only the id is preserved.
    pub fn into_record_with_id(self, id: RecordId) -> Result<SymptomRecord, DomainError> {
        let symptom_name = validate_name(&self.symptom_name)?;
        let date = parse_date(&self.date)?;
        let time = parse_time(self.time.as_deref())?;
        let intensity = validate_intensity(self.intensity)?;
        let notes = validate_notes(self.notes.as_deref())?;
        let triggers = split_labels("triggers", self.triggers.as_deref())?;
        let relief_measures = split_labels("relief measures", self.relief_measures.as_deref())?;

        Ok(SymptomRecord {
            id,
            symptom_name,
            date,
            time,
            intensity,
            notes,
            triggers,
            relief_measures,
        })
    }
}

/// Validate the symptom name: trimmed, at least 2 characters
fn validate_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();

    if trimmed.chars().count() < 2 {
        return Err(DomainError::InvalidName(
            "symptom name must be at least 2 characters".to_string(),
        ));
    }

    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::InvalidName(format!(
            "symptom name cannot be longer than {} characters",
            MAX_NAME_LEN
        )));
    }

    Ok(trimmed.to_string())
}

/// Parse a `YYYY-MM-DD` date and check it falls in the accepted window:
/// not before 1900, not after today (local calendar date)
fn parse_date(raw: &str) -> Result<NaiveDate, DomainError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(format!("'{}' is not a YYYY-MM-DD date", raw)))?;

    if date.year() < MIN_YEAR {
        return Err(DomainError::InvalidDate(format!(
            "date cannot be before the year {}",
            MIN_YEAR
        )));
    }

    let today = Local::now().date_naive();
    if date > today {
        return Err(DomainError::InvalidDate(
            "date cannot be in the future".to_string(),
        ));
    }

    Ok(date)
}

/// Parse an optional `HH:MM` time; empty strings count as absent
fn parse_time(raw: Option<&str>) -> Result<Option<NaiveTime>, DomainError> {
    let raw = match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(None),
    };

    NaiveTime::parse_from_str(raw, "%H:%M")
        .map(Some)
        .map_err(|_| DomainError::InvalidTime(format!("'{}' is not an HH:MM time", raw)))
}

/// Validate the 0-10 intensity scale, both ends inclusive
fn validate_intensity(value: i64) -> Result<u8, DomainError> {
    if !(0..=10).contains(&value) {
        return Err(DomainError::InvalidIntensity(format!(
            "intensity must be between 0 and 10, got {}",
            value
        )));
    }
    Ok(value as u8)
}

/// Validate optional notes; empty text counts as no notes
fn validate_notes(raw: Option<&str>) -> Result<Option<String>, DomainError> {
    let trimmed = match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(None),
    };

    if trimmed.chars().count() > MAX_NOTES_LEN {
        return Err(DomainError::InvalidField {
            field: "notes",
            message: format!("notes cannot be longer than {} characters", MAX_NOTES_LEN),
        });
    }

    Ok(Some(trimmed.to_string()))
}

/// Split a comma-delimited label string into a list
///
/// Segments are trimmed and empty ones discarded, so "Stress, , Heat," comes
/// back as ["Stress", "Heat"].
fn split_labels(field: &'static str, raw: Option<&str>) -> Result<Vec<String>, DomainError> {
    let raw = match raw {
        Some(s) => s,
        None => return Ok(Vec::new()),
    };

    let labels: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    for label in &labels {
        if label.chars().count() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidField {
                field,
                message: format!("label '{}' is longer than {} characters", label, MAX_LABEL_LEN),
            });
        }
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn input(name: &str, intensity: i64) -> SymptomInput {
        SymptomInput {
            symptom_name: name.to_string(),
            date: (Local::now().date_naive() - Duration::days(1)).to_string(),
            time: None,
            intensity,
            notes: None,
            triggers: None,
            relief_measures: None,
        }
    }

    #[test]
    fn test_valid_input_builds_record() {
        let mut raw = input("Headache", 7);
        raw.time = Some("14:30".to_string());
        raw.notes = Some("  behind the eyes  ".to_string());
        raw.triggers = Some("Stress, Lack of sleep".to_string());
        raw.relief_measures = Some("Rest".to_string());

        let record = raw.into_record().unwrap();
        assert_eq!(record.symptom_name, "Headache");
        assert_eq!(record.intensity, 7);
        assert_eq!(record.time, NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(record.notes.as_deref(), Some("behind the eyes"));
        assert_eq!(record.triggers, vec!["Stress", "Lack of sleep"]);
        assert_eq!(record.relief_measures, vec!["Rest"]);
    }

    #[test]
    fn test_intensity_bounds_are_inclusive() {
        assert!(input("Cough", 0).into_record().is_ok());
        assert!(input("Cough", 10).into_record().is_ok());
        assert!(matches!(
            input("Cough", -1).into_record(),
            Err(DomainError::InvalidIntensity(_))
        ));
        assert!(matches!(
            input("Cough", 11).into_record(),
            Err(DomainError::InvalidIntensity(_))
        ));
    }

    #[test]
    fn test_name_must_have_two_characters() {
        assert!(matches!(
            input("", 5).into_record(),
            Err(DomainError::InvalidName(_))
        ));
        assert!(matches!(
            input(" x ", 5).into_record(),
            Err(DomainError::InvalidName(_))
        ));
        assert!(input("Flu", 5).into_record().is_ok());
    }

    #[test]
    fn test_date_window() {
        let mut raw = input("Headache", 5);
        raw.date = "1899-12-31".to_string();
        assert!(matches!(
            raw.clone().into_record(),
            Err(DomainError::InvalidDate(_))
        ));

        raw.date = (Local::now().date_naive() + Duration::days(1)).to_string();
        assert!(matches!(
            raw.clone().into_record(),
            Err(DomainError::InvalidDate(_))
        ));

        raw.date = Local::now().date_naive().to_string();
        assert!(raw.into_record().is_ok());
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let mut raw = input("Headache", 5);
        raw.date = "last tuesday".to_string();
        assert!(matches!(
            raw.clone().into_record(),
            Err(DomainError::InvalidDate(_))
        ));

        // February 30th is not a real calendar date
        raw.date = "2024-02-30".to_string();
        assert!(matches!(
            raw.into_record(),
            Err(DomainError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_label_splitting_discards_empty_segments() {
        let mut raw = input("Headache", 5);
        raw.triggers = Some(" Stress ,, Heat , ".to_string());
        let record = raw.into_record().unwrap();
        assert_eq!(record.triggers, vec!["Stress", "Heat"]);
    }

    #[test]
    fn test_empty_time_string_means_no_time() {
        let mut raw = input("Headache", 5);
        raw.time = Some("   ".to_string());
        let record = raw.into_record().unwrap();
        assert_eq!(record.time, None);
    }

    #[test]
    fn test_malformed_time_is_rejected() {
        let mut raw = input("Headache", 5);
        raw.time = Some("25:99".to_string());
        assert!(matches!(
            raw.into_record(),
            Err(DomainError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_update_path_preserves_id() {
        let id = RecordId::new();
        let record = input("Headache", 5).into_record_with_id(id.clone()).unwrap();
        assert_eq!(record.id, id);
    }
}
