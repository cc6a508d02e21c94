//! seedwatch — Binary Entrypoint
//! One-shot scan: poll configured feeds, keep AI + seed-funding articles,
//! scrape deal details, print a report and export CSV.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use seedwatch::config::{self, ScanConfig};
use seedwatch::filter::KeywordSet;
use seedwatch::ingest::providers::FeedProvider;
use seedwatch::ingest::types::FeedSource;
use seedwatch::page::ArticleFetcher;
use seedwatch::{pipeline, report};

#[derive(Parser, Debug)]
#[command(
    name = "seedwatch",
    version,
    about = "Scan RSS feeds for AI seed-funding news and extract deal details"
)]
struct Cli {
    /// Path to the scan config (TOML, or JSON by extension)
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV destination, overwritten on each run
    #[arg(long, default_value = "results.csv")]
    output: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("seedwatch=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("seedwatch=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn build_sources(cfg: &ScanConfig) -> Vec<Box<dyn FeedSource>> {
    // One shared client; reqwest clients are cheap to clone.
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());

    cfg.feeds
        .iter()
        .map(|f| {
            Box::new(FeedProvider::from_url(&f.name, &f.url, client.clone()))
                as Box<dyn FeedSource>
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load_default()?,
    };
    tracing::debug!(feeds = cfg.feeds.len(), "scan config loaded");

    let seed = KeywordSet::new(&cfg.keywords.seed);
    let ai = KeywordSet::new(&cfg.keywords.ai);
    if seed.is_empty() || ai.is_empty() {
        tracing::warn!("a keyword set is empty; no article can match both categories");
    }

    let sources = build_sources(&cfg);
    let fetcher = ArticleFetcher::new();

    let results = pipeline::run_once(&sources, &seed, &ai, &fetcher).await;

    if results.is_empty() {
        println!("No matching articles right now. Try again later!");
        return Ok(());
    }

    report::print_report(&results);
    report::write_csv(&cli.output, &results)?;
    println!("Results saved to {}", cli.output.display());

    Ok(())
}
