//! Crawler module for concurrent page fetching and processing
//!
//! This module contains the crawl engine:
//! - HTTP fetching with randomized client identities
//! - The frontier queue with completion-counted draining
//! - The fixed worker pool and overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, fetch_page, FetchOutcome, UserAgentPool};
pub use frontier::{Frontier, VisitedSet};

use crate::config::Config;
use crate::state::CrawlState;
use crate::ScanError;

/// Crawls a single site and returns the final persisted state
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Derive the root domain from the seed URL
/// 2. Reload any prior record for that domain, or start empty
/// 3. Seed the frontier and run the worker pool until it drains
/// 4. Record elapsed time as the last persisted write
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `seed_url` - The website URL to start from
///
/// # Returns
///
/// * `Ok(CrawlState)` - The final state, as persisted
/// * `Err(ScanError)` - Invalid seed or unrecoverable storage failure
pub async fn scan_site(config: &Config, seed_url: &str) -> Result<CrawlState, ScanError> {
    Coordinator::new(config, seed_url)?.run().await
}
