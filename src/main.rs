//! shopnav - Stateless product search CLI and API client

use anyhow::Result;
use clap::{Parser, Subcommand};
use shopnav::api::sites::KNOWN_SITES;
use shopnav::commands::SearchCommand;
use shopnav::config::{Config, OutputFormat};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "shopnav",
    version,
    about = "Stateless product search CLI",
    long_about = "Searches a product-search backend across shopping sites and prints the ranked results."
)]
struct Cli {
    /// Backend base URL (default http://127.0.0.1:8000)
    #[arg(long, global = true, env = "SHOPNAV_BASE_URL")]
    base_url: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for products
    #[command(alias = "s")]
    Search {
        /// Search query
        query: String,

        /// Budget cap
        #[arg(long)]
        max_price: Option<u64>,

        /// Source sites to search (comma-separated; default all)
        #[arg(long, value_delimiter = ',')]
        sites: Option<Vec<String>>,

        /// Number of results to request
        #[arg(short, long)]
        k: Option<u32>,

        /// Category hint passed to the backend
        #[arg(long)]
        category_hint: Option<String>,
    },

    /// List the source sites the backend ships extractors for
    Sites,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    config.format = cli.format;
    if let Some(base_url) = cli.base_url {
        config.base_url = Some(base_url);
    }

    match cli.command {
        Commands::Search { query, max_price, sites, k, category_hint } => {
            if let Some(max_price) = max_price {
                config.max_price = Some(max_price);
            }
            if let Some(sites) = sites {
                config.sites = sites;
            }
            if let Some(k) = k {
                config.k = Some(k);
            }
            if let Some(hint) = category_hint {
                config.category_hint = Some(hint);
            }

            let cmd = SearchCommand::new(config);
            let output = cmd.execute(&query).await?;
            println!("{}", output);
        }

        Commands::Sites => {
            println!("Known source sites:\n");
            println!("{:<10} {:<12} {:<20}", "Id", "Label", "Domain");
            println!("{:-<10} {:-<12} {:-<20}", "", "", "");

            for site in KNOWN_SITES {
                println!("{:<10} {:<12} {:<20}", site.id, site.label, site.domain);
            }
        }
    }

    Ok(())
}
