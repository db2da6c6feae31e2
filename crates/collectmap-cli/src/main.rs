use chrono::NaiveDate;
use clap::{Parser, Subcommand};

mod snapshot;

#[derive(Debug, Parser)]
#[command(name = "collectmap-cli")]
#[command(about = "Collection heatmap dashboard command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch categories and transaction points once and print a summary of
    /// what the dashboard would render.
    Snapshot {
        /// Inclusive start date (YYYY-MM-DD).
        #[arg(long, default_value = "2025-01-01")]
        start: NaiveDate,

        /// Inclusive end date (YYYY-MM-DD).
        #[arg(long, default_value = "2025-06-30")]
        end: NaiveDate,

        /// Region override; defaults to the configured region.
        #[arg(long)]
        region: Option<String>,

        /// Restrict to a single material category.
        #[arg(long)]
        category: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = collectmap_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Snapshot {
            start,
            end,
            region,
            category,
        }) => {
            snapshot::run_snapshot(&config, start, end, region.as_deref(), category.as_deref())
                .await
        }
        None => {
            println!("collectmap-cli: try the `snapshot` subcommand");
            Ok(())
        }
    }
}
