/// Tool for logging new symptom records
///
/// This module implements the symptom_log MCP tool.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::domain::SymptomInput;
use crate::storage::{StoreError, SymptomStore};
use crate::tools::persistence_warning;

/// Parameters for logging a symptom occurrence
#[derive(Debug, Deserialize)]
pub struct LogSymptomParams {
    pub symptom_name: String,
    /// Date experienced (`YYYY-MM-DD`), defaults to today
    pub date: Option<String>,
    /// Clock time (`HH:MM`), optional
    pub time: Option<String>,
    /// Severity 0-10
    pub intensity: i64,
    pub notes: Option<String>,
    /// Comma-separated trigger labels
    pub triggers: Option<String>,
    /// Comma-separated relief labels
    pub relief_measures: Option<String>,
}

/// Response from logging a symptom
#[derive(Debug, Serialize)]
pub struct LogSymptomResponse {
    pub success: bool,
    pub record_id: String,
    pub message: String,
}

/// Validate the submission and append it to the store
pub fn log_symptom(
    store: &mut SymptomStore,
    params: LogSymptomParams,
) -> Result<LogSymptomResponse, StoreError> {
    // The entry form defaults the date to today; so does the tool
    let date = params
        .date
        .unwrap_or_else(|| Local::now().date_naive().to_string());

    let input = SymptomInput {
        symptom_name: params.symptom_name,
        date,
        time: params.time,
        intensity: params.intensity,
        notes: params.notes,
        triggers: params.triggers,
        relief_measures: params.relief_measures,
    };

    let record = store.create(input)?;

    let message = format!(
        "✅ Logged '{}' at intensity {}/10 for {}{}",
        record.symptom_name,
        record.intensity,
        record.date,
        persistence_warning(store)
    );

    Ok(LogSymptomResponse {
        success: true,
        record_id: record.id.to_string(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlot;

    fn store() -> SymptomStore {
        SymptomStore::load(Box::new(MemorySlot::new()))
    }

    fn params(name: &str, intensity: i64) -> LogSymptomParams {
        LogSymptomParams {
            symptom_name: name.to_string(),
            date: None,
            time: None,
            intensity,
            notes: None,
            triggers: None,
            relief_measures: None,
        }
    }

    #[test]
    fn test_log_defaults_date_to_today() {
        let mut store = store();
        let response = log_symptom(&mut store, params("Headache", 6)).unwrap();

        assert!(response.success);
        let record = &store.list()[0];
        assert_eq!(record.date, Local::now().date_naive());
        assert_eq!(record.id.to_string(), response.record_id);
    }

    #[test]
    fn test_log_rejects_out_of_range_intensity() {
        let mut store = store();
        let result = log_symptom(&mut store, params("Headache", 11));

        assert!(matches!(result, Err(StoreError::Validation(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_log_splits_delimited_labels() {
        let mut store = store();
        let mut p = params("Migraine", 8);
        p.triggers = Some("Stress, Bright light".to_string());
        p.relief_measures = Some("Rest".to_string());

        log_symptom(&mut store, p).unwrap();

        let record = &store.list()[0];
        assert_eq!(record.triggers, vec!["Stress", "Bright light"]);
        assert_eq!(record.relief_measures, vec!["Rest"]);
    }
}
