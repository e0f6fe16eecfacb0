use crate::app::ports::HttpClientPort;
use crate::config::Config;
use crate::dedupe::Deduplicator;
use crate::error::Result;
use crate::fetcher::{fetch_year, YearFetch};
use crate::normalize::{is_complete, normalize_raw};
use crate::types::NormalizedRecord;
use metrics::counter;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{info, instrument, warn};

/// A year whose request did not return 200
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedYear {
    pub year: i32,
    pub status: u16,
}

/// Counters for one run, before anything is written
#[derive(Debug, Default, Clone, Serialize)]
pub struct BuildStats {
    pub years_requested: usize,
    pub years_skipped: Vec<SkippedYear>,
    pub raw_records: usize,
    pub incomplete_dropped: usize,
    pub duplicates_dropped: usize,
}

/// Result of a complete import run
#[derive(Debug, Serialize)]
pub struct ImportResult {
    pub stats: BuildStats,
    pub saved: usize,
    pub output_file: String,
}

pub struct Pipeline;

impl Pipeline {
    /// Fetches every configured year in order and returns the filtered,
    /// deduplicated records.
    #[instrument(skip_all, fields(first_year = config.first_year, last_year = config.last_year))]
    pub async fn build_lookup(
        config: &Config,
        http: &dyn HttpClientPort,
    ) -> Result<(Vec<NormalizedRecord>, BuildStats)> {
        let mut stats = BuildStats::default();
        let mut dedup = Deduplicator::new();

        for year in config.years() {
            stats.years_requested += 1;
            println!("Downloading year {year}...");
            let url = config.year_url(year);

            let raw_records = match fetch_year(http, &url).await? {
                YearFetch::Records(records) => records,
                YearFetch::Skipped { status } => {
                    println!("Failed to fetch {url} (HTTP {status})");
                    counter!("hotwheels_years_skipped_total").increment(1);
                    stats.years_skipped.push(SkippedYear { year, status });
                    continue;
                }
            };
            counter!("hotwheels_years_fetched_total").increment(1);
            stats.raw_records += raw_records.len();

            let mut kept = 0usize;
            for (index, raw) in raw_records.iter().enumerate() {
                let record = normalize_raw(raw, year, index)?;
                if !is_complete(&record) {
                    stats.incomplete_dropped += 1;
                    continue;
                }
                if dedup.push(record)? {
                    kept += 1;
                }
            }
            info!(year, raw = raw_records.len(), kept, "Processed catalog year");
        }

        stats.duplicates_dropped = dedup.dropped();
        counter!("hotwheels_raw_records_total").increment(stats.raw_records as u64);
        counter!("hotwheels_incomplete_records_total").increment(stats.incomplete_dropped as u64);
        counter!("hotwheels_duplicate_records_total").increment(stats.duplicates_dropped as u64);

        if !stats.years_skipped.is_empty() {
            warn!(skipped = stats.years_skipped.len(), "Some catalog years were skipped");
        }
        Ok((dedup.into_records(), stats))
    }

    /// Runs the whole import and writes the lookup file. Nothing is written
    /// if any step before the write fails.
    pub async fn run(config: &Config, http: &dyn HttpClientPort) -> Result<ImportResult> {
        let (records, stats) = Self::build_lookup(config, http).await?;

        Self::persist_to_json(&records, &config.output_file)?;
        let output_file = config.output_file.to_string_lossy().to_string();
        info!(saved = records.len(), output_file = %output_file, "Lookup file written");
        println!("Saved: {} models to {}", records.len(), output_file);

        Ok(ImportResult {
            stats,
            saved: records.len(),
            output_file,
        })
    }

    /// Writes the records as a 2-space indented JSON array, replacing any existing file
    pub fn persist_to_json(records: &[NormalizedRecord], path: &Path) -> Result<()> {
        let json_content = serde_json::to_string_pretty(records)?;
        fs::write(path, json_content)?;
        Ok(())
    }
}
