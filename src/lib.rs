pub mod config;
pub mod constants;
pub mod dedupe;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod lookup;
pub mod normalize;
pub mod pipeline;
pub mod types;

// Port/adapter boundary for the HTTP transport
pub mod app;
pub mod infra;
