//! Queries against a generated lookup file, matching the way the collection
//! app auto-fills a miniature from a model name or a barcode.

use crate::error::Result;
use crate::types::NormalizedRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{Number, Value};
use std::fs;
use std::path::Path;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A lookup hit, with the record's year converted for the app's `launch_year` field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupMatch {
    #[serde(flatten)]
    pub record: NormalizedRecord,
    pub launch_year: Option<Number>,
}

pub struct LookupIndex {
    records: Vec<NormalizedRecord>,
}

impl LookupIndex {
    pub fn new(records: Vec<NormalizedRecord>) -> Self {
        Self { records }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let records: Vec<NormalizedRecord> = serde_json::from_str(&content)?;
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose model name matches ignoring whitespace and case, or
    /// whose UPC matches exactly. Empty queries are ignored.
    pub fn find(&self, model_name: Option<&str>, upc: Option<&str>) -> Option<LookupMatch> {
        let model_key = model_name.filter(|m| !m.is_empty()).map(squash);
        let upc = upc.filter(|u| !u.is_empty());
        if model_key.is_none() && upc.is_none() {
            return None;
        }

        self.records
            .iter()
            .find(|record| {
                model_key
                    .as_deref()
                    .is_some_and(|key| squash(&record.model_name) == key)
                    || upc.is_some_and(|u| record.upc == u)
            })
            .map(|record| LookupMatch {
                launch_year: launch_year(&record.year),
                record: record.clone(),
            })
    }
}

fn squash(value: &str) -> String {
    WHITESPACE.replace_all(value, "").to_lowercase()
}

/// Numeric reading of a record's year, as the collection app fills `launch_year`.
/// Falsy years (`0`, `""`, `false`, `null`) give nothing; numeric strings may
/// carry a fraction (`"2012.5"` -> `2012.5`); unparseable text gives nothing.
fn launch_year(year: &Value) -> Option<Number> {
    let value = match year {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) if !s.is_empty() => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().ok()?
            }
        }
        Value::Bool(true) => 1.0,
        _ => return None,
    };
    if !value.is_finite() || (value == 0.0 && year.is_number()) {
        return None;
    }
    if value.fract() == 0.0 && value.abs() < 9.0e15 {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}
