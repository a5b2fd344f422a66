/// Basic unit tests to verify core functionality through the public API
use symptom_tracker_mcp::*;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;
    use chrono::{Duration, Local};

    fn sample_input(name: &str, intensity: i64) -> SymptomInput {
        SymptomInput {
            symptom_name: name.to_string(),
            date: (Local::now().date_naive() - Duration::days(1)).to_string(),
            time: Some("08:30".to_string()),
            intensity,
            notes: Some("logged from a test".to_string()),
            triggers: Some("Stress, Heat".to_string()),
            relief_measures: Some("Rest".to_string()),
        }
    }

    #[test]
    fn test_input_validation_builds_record() {
        let record = sample_input("Headache", 6).into_record();

        assert!(record.is_ok());
        let record = record.unwrap();
        assert_eq!(record.symptom_name, "Headache");
        assert_eq!(record.intensity, 6);
        assert_eq!(record.triggers, vec!["Stress", "Heat"]);
    }

    #[test]
    fn test_input_validation_rejects_bad_intensity() {
        assert!(sample_input("Headache", 11).into_record().is_err());
        assert!(sample_input("Headache", -1).into_record().is_err());
        assert!(sample_input("Headache", 0).into_record().is_ok());
        assert!(sample_input("Headache", 10).into_record().is_ok());
    }

    #[test]
    fn test_store_crud_through_public_api() {
        let mut store = SymptomStore::load(Box::new(MemorySlot::new()));

        let created = store.create(sample_input("Headache", 6)).unwrap();
        assert_eq!(store.len(), 1);

        let updated = store
            .update(&created.id, sample_input("Migraine", 8))
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(store.list()[0].symptom_name, "Migraine");

        store.delete(&created.id).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_aggregations_are_exposed() {
        let mut store = SymptomStore::load(Box::new(MemorySlot::new()));
        store.create(sample_input("Headache", 6)).unwrap();
        store.create(sample_input("Headache", 3)).unwrap();
        store.create(sample_input("Cough", 5)).unwrap();

        let ranking = frequency_ranking(store.list());
        assert_eq!(ranking[0].name, "Headache");
        assert_eq!(ranking[0].count, 2);

        let series = intensity_series(store.list(), "Cough");
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].intensity, 5);
    }

    #[test]
    fn test_server_creation_with_memory_slot() {
        let server = SymptomTrackerServer::with_slot(Box::new(MemorySlot::new()));
        assert!(server.store().is_empty());
    }

    #[tokio::test]
    async fn test_server_is_usable_from_the_async_runtime() {
        let mut server = SymptomTrackerServer::with_slot(Box::new(MemorySlot::new()));
        server.store_mut().create(sample_input("Headache", 6)).unwrap();
        assert_eq!(server.store().len(), 1);
    }
}
