use clap::{Parser, Subcommand};
use hotwheels_lookup::config::Config;
use hotwheels_lookup::constants::OUTPUT_FILE;
use hotwheels_lookup::infra::http_client::ReqwestHttp;
use hotwheels_lookup::logging;
use hotwheels_lookup::lookup::LookupIndex;
use hotwheels_lookup::pipeline::Pipeline;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "hotwheels_lookup")]
#[command(about = "Builds and queries the Hot Wheels model lookup file")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the 2010-2020 catalog and write hotwheels_lookup.json
    Fetch,
    /// Find a model in an existing lookup file by name or UPC
    Lookup {
        /// Model name (whitespace and case are ignored)
        #[arg(long)]
        model: Option<String>,
        /// Exact UPC barcode
        #[arg(long)]
        upc: Option<String>,
        /// Lookup file to search
        #[arg(long, default_value = OUTPUT_FILE)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _log_guard = logging::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch => {
            let config = Config::default();
            let http = ReqwestHttp::new();
            info!(api_base = %config.api_base, "Starting catalog import");

            match Pipeline::run(&config, &http).await {
                Ok(result) => {
                    let stats = &result.stats;
                    println!("\nImport summary:");
                    println!("   Years requested: {}", stats.years_requested);
                    println!("   Years skipped: {}", stats.years_skipped.len());
                    println!("   Raw records: {}", stats.raw_records);
                    println!("   Incomplete dropped: {}", stats.incomplete_dropped);
                    println!("   Duplicates dropped: {}", stats.duplicates_dropped);
                    println!("   Output file: {}", result.output_file);
                }
                Err(e) => {
                    error!("Import failed: {}", e);
                    return Err(e.into());
                }
            }
        }
        Commands::Lookup { model, upc, file } => {
            let index = LookupIndex::load(&file)?;
            info!(records = index.len(), file = %file.display(), "Loaded lookup file");

            match index.find(model.as_deref(), upc.as_deref()) {
                Some(hit) => println!("{}", serde_json::to_string_pretty(&hit)?),
                None => println!("No match"),
            }
        }
    }
    Ok(())
}
