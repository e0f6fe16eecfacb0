use crate::app::ports::HttpClientPort;
use crate::error::{json_type_name, ImportError, Result};
use crate::types::RawRecord;
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Outcome of one catalog request
#[derive(Debug)]
pub enum YearFetch {
    Records(Vec<RawRecord>),
    /// Non-200 response; the whole year is left out of the run
    Skipped { status: u16 },
}

/// Fetches one year's page. Only a non-200 status is recoverable; transport
/// failures and bodies that are not a JSON array are returned as errors.
#[instrument(skip(http))]
pub async fn fetch_year(http: &dyn HttpClientPort, url: &str) -> Result<YearFetch> {
    let resp = http.get(url).await?;
    if !resp.is_ok() {
        warn!(status = resp.status, "Catalog request failed, skipping year");
        return Ok(YearFetch::Skipped { status: resp.status });
    }

    debug!(
        bytes = resp.bytes.len(),
        content_type = %resp.content_type,
        "Catalog page received"
    );
    match serde_json::from_slice::<Value>(&resp.bytes)? {
        Value::Array(records) => Ok(YearFetch::Records(records)),
        other => Err(ImportError::UnexpectedBody {
            url: url.to_string(),
            found: json_type_name(&other),
        }),
    }
}
