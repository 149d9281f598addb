// src/main.rs

use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trend_scope::cache::TrendCache;
use trend_scope::config::AppConfig;
use trend_scope::crawler::{Crawler, HttpFetcher};
use trend_scope::server::HttpServer;

/// The main entry point, which dispatches to the correct mode (serve or snapshot).
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    // Default to "serve" if no command is given.
    let command = args.get(1).map_or("serve", |s| s.as_str());

    match command {
        "serve" => run_server().await,
        "snapshot" => run_snapshot().await,
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn build_cache(config: &AppConfig) -> Result<TrendCache> {
    let fetcher = HttpFetcher::new(config.fetch_timeout).context("Failed to build HTTP client")?;
    let crawler = Crawler::new(Arc::new(fetcher), config.sources.clone());
    Ok(TrendCache::new(crawler, config.refresh_interval))
}

/// Warms the trend cache, then serves the JSON API.
async fn run_server() -> Result<()> {
    let config = AppConfig::from_env().context("Invalid configuration")?;
    let cache = Arc::new(build_cache(&config)?);

    info!(sources = config.sources.len(), "building initial trend snapshot");
    cache.warm().await;

    HttpServer::new(config.listen_addr, cache).run().await
}

/// Runs the scrape pipeline once and prints the snapshot as JSON.
async fn run_snapshot() -> Result<()> {
    let config = AppConfig::from_env().context("Invalid configuration")?;
    let cache = build_cache(&config)?;

    let snapshot = match cache.run_pipeline().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(error = %e, "pipeline failed, printing fallback data");
            trend_scope::analysis::TrendSnapshot::fallback()
        }
    };

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Prints the help message for the user.
fn print_usage() {
    println!("--- Fashion Trend Scope ---");
    println!("Usage: cargo run -- [COMMAND]");
    println!("\nCommands:");
    println!("  serve     Scrape the configured sources and serve the trend API (default).");
    println!("  snapshot  Scrape once and print the resulting trend snapshot as JSON.");
}
