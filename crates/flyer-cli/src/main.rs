use clap::{Parser, Subcommand};

mod ads;
mod image;

#[derive(Debug, Parser)]
#[command(name = "flyer")]
#[command(about = "Weekly grocery ad fetcher")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch and print the aggregated weekly ad list.
    Ads {
        /// Store to query, or "All" for the whole roster.
        #[arg(long, default_value = "All")]
        store: String,
        /// Week to query; digits only are fine. Empty means the current
        /// week's Monday.
        #[arg(long, default_value = "")]
        week: String,
        /// Local date filter over the assembled list (YYYY, YYYY-MM, or
        /// YYYY-MM-DD within 7 days).
        #[arg(long, default_value = "")]
        date_filter: String,
        /// Print the list as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Fetch one ad image and print its data URI.
    Image {
        #[arg(long)]
        store: String,
        #[arg(long)]
        week: String,
        #[arg(long)]
        filename: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = flyer_core::load_app_config()?;
    init_tracing(&config.log_level);

    let cli = Cli::parse();
    match cli.command {
        Commands::Ads {
            store,
            week,
            date_filter,
            json,
        } => ads::run(&config, &store, &week, &date_filter, json).await,
        Commands::Image {
            store,
            week,
            filename,
        } => image::run(&config, &store, &week, &filename).await,
    }
}

fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
