use crate::error::Result;
use crate::types::{DedupKey, NormalizedRecord};
use std::collections::HashSet;
use tracing::debug;

/// Keeps the first record seen for every (model_name, brand, year) key.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<DedupKey>,
    records: Vec<NormalizedRecord>,
    dropped: usize,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the record was kept. Fails when the record's `year`
    /// is an array or object.
    pub fn push(&mut self, record: NormalizedRecord) -> Result<bool> {
        if self.seen.insert(record.dedup_key()?) {
            self.records.push(record);
            Ok(true)
        } else {
            debug!(
                model_name = %record.model_name,
                brand = %record.brand,
                year = %record.year,
                "Dropping duplicate record"
            );
            self.dropped += 1;
            Ok(false)
        }
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<NormalizedRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImportError;
    use serde_json::json;

    fn record(model: &str, brand: &str, year: serde_json::Value, color: &str) -> NormalizedRecord {
        NormalizedRecord {
            model_name: model.to_string(),
            brand: brand.to_string(),
            base_color: color.to_string(),
            year,
            series: String::new(),
            collection_number: String::new(),
            upc: String::new(),
        }
    }

    #[test]
    fn first_occurrence_wins() {
        let mut dedup = Deduplicator::new();
        assert!(dedup.push(record("MUSTANG", "Ford", json!(2015), "Red")).unwrap());
        assert!(!dedup.push(record("MUSTANG", "Ford", json!(2015), "Blue")).unwrap());

        assert_eq!(dedup.dropped(), 1);
        let records = dedup.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].base_color, "Red");
    }

    #[test]
    fn any_key_component_difference_keeps_both() {
        let mut dedup = Deduplicator::new();
        assert!(dedup.push(record("MUSTANG", "Ford", json!(2015), "Red")).unwrap());
        assert!(dedup.push(record("MUSTANG", "Ford", json!(2016), "Red")).unwrap());
        assert!(dedup.push(record("MUSTANG", "Shelby", json!(2015), "Red")).unwrap());
        assert!(dedup.push(record("CAMARO", "Ford", json!(2015), "Red")).unwrap());
        assert_eq!(dedup.len(), 4);
        assert_eq!(dedup.dropped(), 0);
    }

    #[test]
    fn numeric_and_string_years_are_distinct_keys() {
        let mut dedup = Deduplicator::new();
        assert!(dedup.push(record("MUSTANG", "Ford", json!(2015), "Red")).unwrap());
        assert!(dedup.push(record("MUSTANG", "Ford", json!("2015"), "Red")).unwrap());
        assert_eq!(dedup.len(), 2);
    }

    #[test]
    fn integral_float_year_matches_integer_year() {
        let mut dedup = Deduplicator::new();
        assert!(dedup.push(record("A", "", json!(2015), "Red")).unwrap());
        assert!(!dedup.push(record("A", "", json!(2015.0), "Blue")).unwrap());
        assert!(dedup.push(record("A", "", json!(2015.5), "Blue")).unwrap());
        assert!(dedup.push(record("A", "", json!(true), "Red")).unwrap());
        assert!(!dedup.push(record("A", "", json!(1), "Red")).unwrap());
        assert!(dedup.push(record("A", "", serde_json::Value::Null, "Red")).unwrap());
        assert_eq!(dedup.len(), 4);
        assert_eq!(dedup.dropped(), 2);
    }

    #[test]
    fn composite_year_is_rejected() {
        let mut dedup = Deduplicator::new();
        let err = dedup.push(record("A", "", json!([2015]), "Red")).unwrap_err();
        assert!(matches!(err, ImportError::UnhashableYear { .. }));
        assert!(dedup.push(record("A", "", json!({"y": 2015}), "Red")).is_err());
        assert!(dedup.is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let mut dedup = Deduplicator::new();
        for model in ["C", "A", "B", "A"] {
            dedup.push(record(model, "Ford", json!(2015), "")).unwrap();
        }
        let models: Vec<String> = dedup.into_records().into_iter().map(|r| r.model_name).collect();
        assert_eq!(models, vec!["C", "A", "B"]);
    }
}
