/// Tool for a quick overview of the symptom log
///
/// This module implements the symptom_status MCP tool.

use serde::Serialize;

use crate::analytics::frequency_ranking;
use crate::storage::SymptomStore;

/// Response summarizing the state of the log
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub total_records: usize,
    pub distinct_symptoms: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub most_frequent: Option<String>,
    /// True when the last write-back failed and memory is ahead of disk
    pub unsaved_changes: bool,
    pub message: String,
}

/// Summarize the store's current contents
pub fn get_status(store: &SymptomStore) -> StatusResponse {
    let records = store.list();
    let ranking = frequency_ranking(records);

    let first_date = records.iter().map(|r| r.date).min().map(|d| d.to_string());
    let last_date = records.iter().map(|r| r.date).max().map(|d| d.to_string());
    let most_frequent = ranking.first().map(|f| f.name.clone());
    let distinct_symptoms = ranking.len();
    let unsaved_changes = store.has_unsaved_changes();

    let message = if records.is_empty() {
        "No symptoms logged yet. Use symptom_log to record your first one.".to_string()
    } else {
        let mut msg = format!(
            "🩺 {} record(s) across {} distinct symptom(s), from {} to {}.",
            records.len(),
            distinct_symptoms,
            first_date.as_deref().unwrap_or("-"),
            last_date.as_deref().unwrap_or("-"),
        );
        if let Some(name) = &most_frequent {
            msg.push_str(&format!(" Most frequent: {}.", name));
        }
        if unsaved_changes {
            msg.push_str("\n⚠️ The last save failed; changes are kept for this session only.");
        }
        msg
    };

    StatusResponse {
        total_records: records.len(),
        distinct_symptoms,
        first_date,
        last_date,
        most_frequent,
        unsaved_changes,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlot;
    use crate::tools::{log_symptom, LogSymptomParams};
    use chrono::{Duration, Local};

    #[test]
    fn test_status_on_empty_store() {
        let store = SymptomStore::load(Box::new(MemorySlot::new()));
        let status = get_status(&store);

        assert_eq!(status.total_records, 0);
        assert_eq!(status.first_date, None);
        assert_eq!(status.most_frequent, None);
        assert!(!status.unsaved_changes);
    }

    #[test]
    fn test_status_summarizes_span_and_top_symptom() {
        let mut store = SymptomStore::load(Box::new(MemorySlot::new()));
        let today = Local::now().date_naive();
        for (name, days_ago) in [("Headache", 6), ("Headache", 2), ("Cough", 4)] {
            log_symptom(
                &mut store,
                LogSymptomParams {
                    symptom_name: name.to_string(),
                    date: Some((today - Duration::days(days_ago)).to_string()),
                    time: None,
                    intensity: 5,
                    notes: None,
                    triggers: None,
                    relief_measures: None,
                },
            )
            .unwrap();
        }

        let status = get_status(&store);
        assert_eq!(status.total_records, 3);
        assert_eq!(status.distinct_symptoms, 2);
        assert_eq!(status.most_frequent.as_deref(), Some("Headache"));
        assert_eq!(
            status.first_date.as_deref(),
            Some((today - Duration::days(6)).to_string().as_str())
        );
        assert_eq!(
            status.last_date.as_deref(),
            Some((today - Duration::days(2)).to_string().as_str())
        );
    }
}
