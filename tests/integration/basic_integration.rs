/// Basic integration tests against the on-disk data file
use symptom_tracker_mcp::*;
use tempfile::tempdir;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;
    use chrono::{Duration, Local};

    fn sample_input(name: &str, days_ago: i64, intensity: i64) -> SymptomInput {
        SymptomInput {
            symptom_name: name.to_string(),
            date: (Local::now().date_naive() - Duration::days(days_ago)).to_string(),
            time: None,
            intensity,
            notes: None,
            triggers: None,
            relief_measures: None,
        }
    }

    #[test]
    fn test_collection_survives_server_restart() {
        let dir = tempdir().expect("Failed to create temp dir");
        let data_path = dir.path().join("symptoms.json");

        // First session: log a couple of symptoms
        let mut server = SymptomTrackerServer::new(data_path.clone());
        server.store_mut().create(sample_input("Headache", 3, 4)).unwrap();
        server.store_mut().create(sample_input("Cough", 1, 6)).unwrap();
        let first_session: Vec<_> = server.store().list().to_vec();
        drop(server);

        // Second session over the same file sees the same collection
        let server = SymptomTrackerServer::new(data_path);
        assert_eq!(server.store().list(), first_session.as_slice());
    }

    #[test]
    fn test_corrupt_data_file_starts_empty() {
        let dir = tempdir().expect("Failed to create temp dir");
        let data_path = dir.path().join("symptoms.json");
        std::fs::write(&data_path, "not json at all {{{").unwrap();

        let server = SymptomTrackerServer::new(data_path.clone());
        assert!(server.store().is_empty());

        // And the next mutation rewrites the slot with a clean document
        let mut server = server;
        server.store_mut().create(sample_input("Headache", 1, 5)).unwrap();
        let payload = std::fs::read_to_string(&data_path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_data_file_starts_empty() {
        let dir = tempdir().expect("Failed to create temp dir");
        let server = SymptomTrackerServer::new(dir.path().join("does_not_exist_yet.json"));
        assert!(server.store().is_empty());
    }

    #[test]
    fn test_persisted_document_uses_wire_format() {
        let dir = tempdir().expect("Failed to create temp dir");
        let data_path = dir.path().join("symptoms.json");

        let mut server = SymptomTrackerServer::new(data_path.clone());
        let mut input = sample_input("Headache", 2, 7);
        input.time = Some("14:30".to_string());
        input.relief_measures = Some("Rest".to_string());
        server.store_mut().create(input).unwrap();

        let payload = std::fs::read_to_string(&data_path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();
        let record = &parsed.as_array().unwrap()[0];

        assert_eq!(record["symptomName"], "Headache");
        assert_eq!(record["time"], "14:30");
        assert_eq!(record["reliefMeasures"][0], "Rest");
        assert!(record.get("relief_measures").is_none());
    }

    #[test]
    fn test_storage_interface_is_object_safe() {
        let slot = MemorySlot::new();
        let _: &dyn PersistenceSlot = &slot;
    }
}
