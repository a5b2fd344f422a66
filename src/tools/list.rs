/// Tool for listing symptom records
///
/// This module implements the symptom_list MCP tool.

use serde::{Deserialize, Serialize};

use crate::storage::{StoreError, SymptomStore};

/// Parameters for listing symptom records
#[derive(Debug, Deserialize)]
pub struct ListSymptomsParams {
    /// Exact-name filter (case-sensitive, like everything else here)
    pub symptom_name: Option<String>,
    /// Sort order: "date" (newest first, the default), "name", "intensity"
    pub sort_by: Option<String>,
}

/// One record as presented in the list
#[derive(Debug, Serialize)]
pub struct SymptomRow {
    pub record_id: String,
    pub symptom_name: String,
    pub date: String,
    pub time: Option<String>,
    pub intensity: u8,
    pub notes: Option<String>,
    pub triggers: Vec<String>,
    pub relief_measures: Vec<String>,
}

/// Response from listing symptom records
#[derive(Debug, Serialize)]
pub struct ListSymptomsResponse {
    pub records: Vec<SymptomRow>,
    pub total: usize,
    pub message: String,
}

/// List records with an optional name filter and sort order
pub fn list_symptoms(
    store: &SymptomStore,
    params: ListSymptomsParams,
) -> Result<ListSymptomsResponse, StoreError> {
    let mut records: Vec<_> = store
        .list()
        .iter()
        .filter(|r| match &params.symptom_name {
            Some(name) => &r.symptom_name == name,
            None => true,
        })
        .collect();

    match params.sort_by.as_deref() {
        Some("name") => records.sort_by(|a, b| a.symptom_name.cmp(&b.symptom_name)),
        Some("intensity") => records.sort_by(|a, b| b.intensity.cmp(&a.intensity)),
        // Newest first, like the tracking table
        _ => records.sort_by(|a, b| (b.date, b.time).cmp(&(a.date, a.time))),
    }

    let rows: Vec<SymptomRow> = records
        .into_iter()
        .map(|r| SymptomRow {
            record_id: r.id.to_string(),
            symptom_name: r.symptom_name.clone(),
            date: r.date.to_string(),
            time: r.time.map(|t| t.format("%H:%M").to_string()),
            intensity: r.intensity,
            notes: r.notes.clone(),
            triggers: r.triggers.clone(),
            relief_measures: r.relief_measures.clone(),
        })
        .collect();

    let message = if rows.is_empty() {
        "No symptoms logged yet. Use symptom_log to record your first one.".to_string()
    } else {
        let lines = rows
            .iter()
            .map(|row| {
                let mut line = format!(
                    "📋 {} — {} ({}/10)",
                    row.date, row.symptom_name, row.intensity
                );
                if let Some(time) = &row.time {
                    line.push_str(&format!(" at {}", time));
                }
                if let Some(notes) = &row.notes {
                    line.push_str(&format!("\n   Notes: {}", notes));
                }
                if !row.triggers.is_empty() {
                    line.push_str(&format!("\n   Triggers: {}", row.triggers.join(", ")));
                }
                if !row.relief_measures.is_empty() {
                    line.push_str(&format!("\n   Relief: {}", row.relief_measures.join(", ")));
                }
                line.push_str(&format!("\n   Id: {}", row.record_id));
                line
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{} symptom record(s)\n\n{}", rows.len(), lines)
    };

    Ok(ListSymptomsResponse {
        total: rows.len(),
        records: rows,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlot;
    use crate::tools::{log_symptom, LogSymptomParams};
    use chrono::{Duration, Local};

    fn seeded_store() -> SymptomStore {
        let mut store = SymptomStore::load(Box::new(MemorySlot::new()));
        for (name, days_ago, intensity) in
            [("Headache", 3, 4), ("Cough", 1, 7), ("Headache", 2, 6)]
        {
            log_symptom(
                &mut store,
                LogSymptomParams {
                    symptom_name: name.to_string(),
                    date: Some(
                        (Local::now().date_naive() - Duration::days(days_ago)).to_string(),
                    ),
                    time: None,
                    intensity,
                    notes: None,
                    triggers: None,
                    relief_measures: None,
                },
            )
            .unwrap();
        }
        store
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let store = seeded_store();
        let response = list_symptoms(
            &store,
            ListSymptomsParams {
                symptom_name: None,
                sort_by: None,
            },
        )
        .unwrap();

        assert_eq!(response.total, 3);
        assert_eq!(response.records[0].symptom_name, "Cough");
    }

    #[test]
    fn test_intensity_sort_is_descending() {
        let store = seeded_store();
        let response = list_symptoms(
            &store,
            ListSymptomsParams {
                symptom_name: None,
                sort_by: Some("intensity".to_string()),
            },
        )
        .unwrap();

        let intensities: Vec<u8> = response.records.iter().map(|r| r.intensity).collect();
        assert_eq!(intensities, vec![7, 6, 4]);
    }

    #[test]
    fn test_name_filter_is_exact() {
        let store = seeded_store();
        let response = list_symptoms(
            &store,
            ListSymptomsParams {
                symptom_name: Some("Headache".to_string()),
                sort_by: None,
            },
        )
        .unwrap();

        assert_eq!(response.total, 2);
        assert!(response
            .records
            .iter()
            .all(|r| r.symptom_name == "Headache"));
    }
}
