use crate::error::{json_type_name, ImportError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw vehicle record as returned from the catalog API
pub type RawRecord = Value;

/// One entry of the lookup file. Field order here is the field order on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub model_name: String,
    pub brand: String,
    pub base_color: String,
    /// Raw `year` value when the API sent one (any JSON type), else the fetch year
    pub year: Value,
    pub series: String,
    pub collection_number: String,
    pub upc: String,
}

/// Identity used to collapse duplicate records: (model_name, brand, year)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey(pub String, pub String, pub YearKey);

/// Hashable form of a raw `year`. Numbers compare by value, so `2015` and
/// `2015.0` are one key, as are `true` and `1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum YearKey {
    Null,
    Int(i128),
    /// Bit pattern of a non-integral float
    Float(u64),
    Text(String),
}

impl YearKey {
    /// `None` for arrays and objects, which have no identity as a year.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(YearKey::Null),
            Value::Bool(b) => Some(YearKey::Int(i128::from(*b))),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(YearKey::Int(i128::from(i)))
                } else if let Some(u) = n.as_u64() {
                    Some(YearKey::Int(i128::from(u)))
                } else {
                    let f = n.as_f64()?;
                    if f.fract() == 0.0 && f.abs() < 1e38 {
                        Some(YearKey::Int(f as i128))
                    } else {
                        Some(YearKey::Float(f.to_bits()))
                    }
                }
            }
            Value::String(s) => Some(YearKey::Text(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl NormalizedRecord {
    pub fn dedup_key(&self) -> Result<DedupKey> {
        let year = YearKey::from_value(&self.year).ok_or_else(|| ImportError::UnhashableYear {
            model_name: self.model_name.clone(),
            found: json_type_name(&self.year),
        })?;
        Ok(DedupKey(self.model_name.clone(), self.brand.clone(), year))
    }
}
