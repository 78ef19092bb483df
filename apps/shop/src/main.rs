//! # Shop
//!
//! Command-line front end for the catalog.
//!
//! ## Run Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           shop                                          │
//! │                                                                         │
//! │  config: defaults → shop.toml → SHOPKEEP_* env → CLI flags              │
//! │                                                                         │
//! │  no input files ──► demo: Tea, report, six reviews, report              │
//! │                                                                         │
//! │  --products / --reviews ──► ingest (bad lines skipped)                  │
//! │                             reports for each --report id                │
//! │                             listing: rating desc, price desc            │
//! │                             discounts by rating (text or --json)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reports go to stdout; logs go to stderr and follow `RUST_LOG`.

mod ingest;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use shopkeep_catalog::sort::{self, Comparator};
use shopkeep_catalog::{Catalog, ShopConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::ingest::RecordFile;

const DEMO_PRODUCT: &str = "D,101,Tea,1.99,0,2021-09-21";
const DEMO_PRODUCT_ID: i32 = 101;
const DEMO_REVIEWS: [&str; 6] = [
    "101,4,Nice hot cup of tea",
    "101,2,Rather weak tea",
    "101,4,Fine tea",
    "101,4,Good tea",
    "101,5,Perfect tea",
    "101,3,Just add some lemon",
];

#[derive(Parser, Debug)]
#[command(name = "shop", about = "Product catalog with reviews, ratings and discounts")]
struct Cli {
    /// Config file (default: shop.toml in the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Locale for reports, e.g. en-GB, fr-FR, zh-CN.
    #[arg(long)]
    locale: Option<String>,

    /// Product records: <kind>,<id>,<name>,<price>,<stars>[,<best-before>]
    #[arg(long)]
    products: Option<PathBuf>,

    /// Review records: <id>,<stars>,<comment>
    #[arg(long)]
    reviews: Option<PathBuf>,

    /// Print the review report for this product id. Repeatable.
    #[arg(long = "report", value_name = "ID")]
    reports: Vec<i32>,

    /// Print the discount table as JSON.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn apply_to(&self, config: &mut ShopConfig) {
        if let Some(locale) = &self.locale {
            config.catalog.locale = locale.clone();
        }
        if let Some(products) = &self.products {
            config.input.products = Some(products.clone());
        }
        if let Some(reviews) = &self.reviews {
            config.input.reviews = Some(reviews.clone());
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = ShopConfig::load_or_default(cli.config.clone());
    cli.apply_to(&mut config);
    config.validate().context("invalid configuration")?;
    info!(locale = config.locale(), "Configuration loaded");

    let mut catalog = Catalog::from_config(&config);

    if config.input.has_files() {
        run_ingest(&mut catalog, &config, &cli)
    } else {
        run_demo(&mut catalog)
    }
}

/// Initializes logging to stderr. `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopkeep=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo(catalog: &mut Catalog) -> Result<()> {
    info!("No input files configured, running demo");

    catalog.parse_product(DEMO_PRODUCT)?;
    print!("{}", catalog.report_for(DEMO_PRODUCT_ID)?);

    for review in DEMO_REVIEWS {
        catalog.parse_review(review)?;
    }
    print!("{}", catalog.report_for(DEMO_PRODUCT_ID)?);

    Ok(())
}

fn run_ingest(catalog: &mut Catalog, config: &ShopConfig, cli: &Cli) -> Result<()> {
    if let Some(path) = &config.input.products {
        ingest::ingest_file(catalog, path, RecordFile::Products)?;
    }
    if let Some(path) = &config.input.reviews {
        ingest::ingest_file(catalog, path, RecordFile::Reviews)?;
    }

    for &id in &cli.reports {
        match catalog.report_for(id) {
            Ok(report) => print!("{}", report),
            Err(err) if err.is_not_found() => warn!(product_id = id, "{}", err),
            Err(err) => return Err(err.into()),
        }
    }

    let best_first = sort::by_rating()
        .reversed()
        .then_by(sort::by_price().reversed());
    print!("{}", catalog.print_products(sort::all(), best_first));

    let discounts = catalog.discounts_by_rating();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&discounts)?);
    } else {
        for (rating, amount) in &discounts {
            println!("{}\t{}", rating, amount);
        }
    }

    Ok(())
}
