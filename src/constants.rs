/// Catalog endpoint; the year is appended as the last path segment
pub const API_BASE: &str = "https://fastwheelsapi.joedots1.repl.co/car/";

// Catalog years fetched on every run (inclusive)
pub const FIRST_YEAR: i32 = 2010;
pub const LAST_YEAR: i32 = 2020;

/// Lookup file written to the working directory
pub const OUTPUT_FILE: &str = "hotwheels_lookup.json";

// Raw record keys as served by the catalog API
pub const RAW_NAME: &str = "name";
pub const RAW_MANUFACTURER: &str = "manufacturer";
pub const RAW_COLOR: &str = "color";
pub const RAW_YEAR: &str = "year";
pub const RAW_SERIES: &str = "series";
pub const RAW_NUMBER: &str = "number";
pub const RAW_UPC: &str = "upc";

// Rolling JSON logs, one file per day
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE_PREFIX: &str = "import.log";

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "hotwheels_lookup=info,warn";
