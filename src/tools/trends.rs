/// Tool for chart-ready symptom trends
///
/// This module implements the symptom_trends MCP tool: the intensity
/// series for one symptom and the frequency ranking across all of them,
/// straight from the aggregation engine.

use serde::{Deserialize, Serialize};

use crate::analytics::{frequency_ranking, intensity_series, IntensityPoint, SymptomFrequency};
use crate::storage::{StoreError, SymptomStore};

/// Parameters for the trends view
#[derive(Debug, Deserialize)]
pub struct TrendsParams {
    /// Symptom to chart; defaults to the most frequently logged one
    pub symptom_name: Option<String>,
}

/// Response carrying both derived views
#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    /// The symptom the series was computed for, if any was selectable
    pub symptom_name: Option<String>,
    pub series: Vec<IntensityPoint>,
    pub ranking: Vec<SymptomFrequency>,
    pub message: String,
}

/// Compute both aggregate views over the store's current snapshot
pub fn symptom_trends(
    store: &SymptomStore,
    params: TrendsParams,
) -> Result<TrendsResponse, StoreError> {
    let records = store.list();
    let ranking = frequency_ranking(records);

    // Mirror the chart page: if no symptom is picked, chart the top one
    let selected = params
        .symptom_name
        .or_else(|| ranking.first().map(|f| f.name.clone()));

    let series = match &selected {
        Some(name) => intensity_series(records, name),
        None => Vec::new(),
    };

    let message = build_message(&selected, &series, &ranking);

    Ok(TrendsResponse {
        symptom_name: selected,
        series,
        ranking,
        message,
    })
}

fn build_message(
    selected: &Option<String>,
    series: &[IntensityPoint],
    ranking: &[SymptomFrequency],
) -> String {
    if ranking.is_empty() {
        return "No symptoms logged yet, so there are no trends to show.".to_string();
    }

    let mut out = String::new();

    match selected {
        Some(name) if !series.is_empty() => {
            out.push_str(&format!("📈 Intensity over time — {}\n", name));
            for point in series {
                out.push_str(&format!("   {}  {}/10\n", point.date, point.intensity));
            }
        }
        Some(name) => {
            out.push_str(&format!("📈 No entries recorded for '{}'.\n", name));
        }
        None => {}
    }

    out.push_str("\n📊 Most frequent symptoms\n");
    for (rank, entry) in ranking.iter().enumerate() {
        out.push_str(&format!(
            "   {}. {} — {} occurrence(s)\n",
            rank + 1,
            entry.name,
            entry.count
        ));
    }

    out.trim_end().to_string()
}
