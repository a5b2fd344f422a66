/// Tool for editing existing symptom records
///
/// This module implements the symptom_update MCP tool. An update replaces
/// the record at the given id wholesale: omitted parameters are prefilled
/// from the existing record (the way an edit form prefills its fields), the
/// result is validated like a fresh submission, and the stored record is
/// swapped for the new one under the same id.

use serde::{Deserialize, Serialize};

use crate::domain::SymptomInput;
use crate::storage::{StoreError, SymptomStore};
use crate::tools::{parse_record_id, persistence_warning};

/// Parameters for updating a symptom record
///
/// Only `record_id` is required. Pass an empty string to clear an optional
/// text field (notes, triggers, relief measures).
#[derive(Debug, Deserialize)]
pub struct UpdateSymptomParams {
    pub record_id: String,
    pub symptom_name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub intensity: Option<i64>,
    pub notes: Option<String>,
    pub triggers: Option<String>,
    pub relief_measures: Option<String>,
}

/// Response from updating a symptom record
#[derive(Debug, Serialize)]
pub struct UpdateSymptomResponse {
    pub success: bool,
    pub record_id: String,
    pub message: String,
}

/// Replace the record at the given id with a revalidated one
pub fn update_symptom(
    store: &mut SymptomStore,
    params: UpdateSymptomParams,
) -> Result<UpdateSymptomResponse, StoreError> {
    let id = parse_record_id(&params.record_id)?;

    let existing = store
        .get(&id)
        .cloned()
        .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

    // Prefill omitted fields from the existing record, then revalidate the
    // whole thing as if it were a new submission
    let input = SymptomInput {
        symptom_name: params
            .symptom_name
            .unwrap_or_else(|| existing.symptom_name.clone()),
        date: params.date.unwrap_or_else(|| existing.date.to_string()),
        time: params
            .time
            .or_else(|| existing.time.map(|t| t.format("%H:%M").to_string())),
        intensity: params.intensity.unwrap_or(existing.intensity as i64),
        notes: params.notes.or_else(|| existing.notes.clone()),
        triggers: params.triggers.or_else(|| join_labels(&existing.triggers)),
        relief_measures: params
            .relief_measures
            .or_else(|| join_labels(&existing.relief_measures)),
    };

    let record = store.update(&id, input)?;

    let message = format!(
        "✅ Updated '{}' ({}){}",
        record.symptom_name,
        record.date,
        persistence_warning(store)
    );

    Ok(UpdateSymptomResponse {
        success: true,
        record_id: record.id.to_string(),
        message,
    })
}

/// Rejoin stored labels into the delimited form validation expects
fn join_labels(labels: &[String]) -> Option<String> {
    if labels.is_empty() {
        None
    } else {
        Some(labels.join(", "))
    }
}
