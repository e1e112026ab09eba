//! sheet-catalog - Spreadsheet-backed product catalog CLI

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sheet_catalog::catalog::{parse_catalog, CatalogFetch, SheetClient};
use sheet_catalog::commands::{ExportCommand, ListCommand, ShowCommand, StatsCommand};
use sheet_catalog::config::{Config, OutputFormat};
use sheet_catalog::filters::{Bucket, ExtraSelector};
use sheet_catalog::paging;
use sheet_catalog::session::{distinct_extra_tags, FilterState};
use sheet_catalog::sort::{Direction, SortField, SortSpec};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sheet-catalog",
    version,
    about = "Spreadsheet-backed product catalog CLI",
    long_about = "Fetches a product catalog from a spreadsheet web-app endpoint and lets you search, filter, sort, paginate, summarize, and export it."
)]
struct Cli {
    /// Catalog endpoint URL
    #[arg(long, global = true, env = "CATALOG_URL")]
    url: Option<String>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "CATALOG_PROXY")]
    proxy: Option<String>,

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

/// Filter and sort selections shared by list, export, and stats.
#[derive(Args)]
struct FilterArgs {
    /// Keep products whose name or tags contain this text
    #[arg(short, long)]
    search: Option<String>,

    /// Price bucket: all, low (under 500), medium (500-1499), high (1500 and up)
    #[arg(long, default_value = "all")]
    price: Bucket,

    /// Points bucket: all, low (under 50), medium (50-149), high (150 and up)
    #[arg(long, default_value = "all")]
    points: Bucket,

    /// Tag selector: all, none, or a tag substring
    #[arg(long, default_value = "all")]
    extra: ExtraSelector,

    /// Sort field: serial, name, price, points, extra
    #[arg(long)]
    sort: Option<SortField>,

    /// Sort descending (requires --sort)
    #[arg(long, requires = "sort")]
    desc: bool,
}

impl FilterArgs {
    fn into_state(self) -> FilterState {
        FilterState {
            search: self.search.unwrap_or_default(),
            price_bucket: self.price,
            points_bucket: self.points,
            extra: self.extra,
            sort: self.sort.map(|field| SortSpec {
                field,
                direction: if self.desc { Direction::Desc } else { Direction::Asc },
            }),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List one page of the catalog
    #[command(alias = "l")]
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// 1-based page number
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Products per page (5, 10, 20, or 50)
        #[arg(long, value_parser = paging::parse_page_size)]
        page_size: Option<usize>,
    },

    /// Show one product by serial number
    #[command(alias = "s")]
    Show {
        /// Serial number to look up
        serial: String,
    },

    /// Export the filtered view as CSV
    #[command(alias = "e")]
    Export {
        #[command(flatten)]
        filters: FilterArgs,

        /// Output path (default: products_<date>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Summarize the filtered view
    Stats {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the distinct tags found in the catalog
    Tags,
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

    if let Some(url) = cli.url {
        config.url = url;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }

    match cli.command {
        Commands::List { filters, page, page_size } => {
            let page_size = page_size.unwrap_or(config.page_size);
            let cmd = ListCommand::new(config, filters.into_state(), page, page_size);
            println!("{}", cmd.execute().await?);
        }

        Commands::Show { serial } => {
            let cmd = ShowCommand::new(config);
            println!("{}", cmd.execute(&serial).await?);
        }

        Commands::Export { filters, output } => {
            let cmd = ExportCommand::new(config, filters.into_state(), output);
            println!("{}", cmd.execute().await?);
        }

        Commands::Stats { filters } => {
            let cmd = StatsCommand::new(config, filters.into_state());
            println!("{}", cmd.execute().await?);
        }

        Commands::Tags => {
            let client = SheetClient::new(&config)?;
            let body = client.fetch().await?;
            let products = parse_catalog(&body)?;

            let tags = distinct_extra_tags(&products);
            if tags.is_empty() {
                println!("No tags found.");
            } else {
                println!("Tags found in the catalog:\n");
                for tag in &tags {
                    println!("  {}", tag);
                }
                println!("\n{} distinct tags", tags.len());
            }
        }
    }

    Ok(())
}
