/// Aggregation engine deriving chart-ready views from a record snapshot
///
/// Two pure functions over a slice of records: a time-ordered intensity
/// series for one symptom name, and a frequency ranking across all names.
/// Both are deterministic and stateless - they recompute from the snapshot
/// they are handed and cache nothing between calls, so the presentation
/// layer can rerun them on every store change.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::SymptomRecord;

/// The frequency ranking is truncated to this many entries
pub const RANKING_LIMIT: usize = 10;

/// One point of the intensity-over-time series for a single symptom
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntensityPoint {
    pub date: NaiveDate,
    pub intensity: u8,
}

/// Occurrence count for one distinct symptom name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomFrequency {
    pub name: String,
    pub count: usize,
}

/// Time-ordered intensity series for the records matching `symptom_name`
///
/// Matching is exact and case-sensitive - names are never normalized, so
/// "headache" and "Headache" produce separate series. One point is emitted
/// per matching record; multiple same-day entries stay as multiple points.
/// Same-day entries order by their clock time when one was logged (entries
/// without a time sort first); the sort is stable, so records tying on both
/// keys keep their insertion order.
pub fn intensity_series(records: &[SymptomRecord], symptom_name: &str) -> Vec<IntensityPoint> {
    let mut matching: Vec<&SymptomRecord> = records
        .iter()
        .filter(|r| r.symptom_name == symptom_name)
        .collect();

    matching.sort_by_key(|r| (r.date, r.time));

    matching
        .into_iter()
        .map(|r| IntensityPoint {
            date: r.date,
            intensity: r.intensity,
        })
        .collect()
}

/// Occurrence counts per distinct symptom name, most frequent first
///
/// Ties keep first-seen order (the order names first appear in the
/// snapshot); the result is truncated to the RANKING_LIMIT most frequent.
pub fn frequency_ranking(records: &[SymptomRecord]) -> Vec<SymptomFrequency> {
    let mut ranking: Vec<SymptomFrequency> = Vec::new();

    for record in records {
        match ranking.iter_mut().find(|f| f.name == record.symptom_name) {
            Some(entry) => entry.count += 1,
            None => ranking.push(SymptomFrequency {
                name: record.symptom_name.clone(),
                count: 1,
            }),
        }
    }

    // Stable sort keeps first-seen order for equal counts
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking.truncate(RANKING_LIMIT);
    ranking
}
