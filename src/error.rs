use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Field '{field}' must be a string, found {found}")]
    FieldType { field: &'static str, found: String },

    #[error("Record '{model_name}' has a year of type {found}, which cannot be compared")]
    UnhashableYear { model_name: String, found: String },

    #[error("Record {index} for year {year} is not a JSON object")]
    NotAnObject { year: i32, index: usize },

    #[error("Unexpected response body for {url}: expected a JSON array, found {found}")]
    UnexpectedBody { url: String, found: String },
}

pub type Result<T> = std::result::Result<T, ImportError>;

/// Short JSON type name used in error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
    .to_string()
}
