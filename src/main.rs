//! # Sözcü Indexer
//!
//! Scrapes the [Sözcü](https://www.sozcu.com.tr) front page, downloads each
//! linked article, and indexes the article text into Elasticsearch.
//!
//! ## Architecture
//!
//! The application is a single linear pipeline, run once per invocation:
//! 1. **Discovery**: fetch the front page and extract headline links
//! 2. **Fetching**: download each article sequentially and extract its text
//! 3. **Indexing**: upsert every article that has content, keyed by the
//!    SHA-256 of its URL so repeated runs update documents in place
//!
//! Partial failures degrade the run instead of aborting it: an unreachable
//! search store downgrades the run to scrape-only, a failed article fetch
//! keeps a placeholder, and a failed write is counted and skipped. The
//! process always exits normally.

use std::error::Error;

use tracing::{error, info, instrument, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod config;
mod dom;
mod error;
mod fetch;
mod models;
mod scrapers;
mod store;
mod utils;

use config::ScrapeConfig;
use fetch::PageFetcher;
use store::elastic::SearchStore;
use store::indexer;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("sozcu_indexer starting up");

    let config = ScrapeConfig::default();
    info!(
        homepage = %config.homepage_url,
        store = %config.store_host,
        index = %config.index_name,
        "Loaded configuration"
    );

    // --- Connect to the search store (optional for the run) ---
    let store = match SearchStore::connect(&config).await {
        Ok(store) => {
            if let Err(e) = store.ensure_index().await {
                warn!(error = %e, "Could not prepare the search index; writes may fail");
            }
            Some(store)
        }
        Err(e) => {
            warn!(error = %e, "Search store unavailable; continuing without indexing");
            None
        }
    };

    // ---- Scrape the front page and its articles ----
    let fetcher = PageFetcher::new(&config);
    let records = match scrapers::sozcu::scrape_front_page(&fetcher, &config).await {
        Ok(records) => records,
        Err(e) => {
            error!(error = %e, "Front page scrape failed; continuing with no articles");
            Vec::new()
        }
    };

    // ---- Persist into the search index ----
    if records.is_empty() {
        warn!("No articles were scraped this run");
    } else if let Some(ref store) = store {
        let summary = indexer::index_records(store, &records).await;
        if !summary.any_indexed() {
            warn!("No documents were indexed this run");
        }
    } else {
        warn!(
            count = records.len(),
            "Search store unavailable; scraped articles were not indexed"
        );
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        articles = records.len(),
        "Execution complete"
    );

    Ok(())
}
