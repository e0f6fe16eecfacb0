use crate::constants::{API_BASE, FIRST_YEAR, LAST_YEAR, OUTPUT_FILE};
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Run settings. The shipped binary always uses `Config::default()`.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub first_year: i32,
    pub last_year: i32,
    pub output_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: API_BASE.to_string(),
            first_year: FIRST_YEAR,
            last_year: LAST_YEAR,
            output_file: PathBuf::from(OUTPUT_FILE),
        }
    }
}

impl Config {
    /// Years to fetch, in fetch order. This order decides which duplicate wins.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.first_year..=self.last_year
    }

    pub fn year_url(&self, year: i32) -> String {
        format!("{}{}", self.api_base, year)
    }
}
