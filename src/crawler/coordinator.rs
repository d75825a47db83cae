//! Crawl coordinator - worker pool orchestration
//!
//! This module wires the crawl together: it derives the root domain from the
//! seed, opens the store (reloading any prior record), seeds the frontier,
//! and runs the fixed pool of workers until the frontier drains. Each worker
//! loops: dequeue with a bounded wait, atomically claim the URL in the
//! visited set, fetch, extract, merge, and feed filtered outbound links back
//! into the frontier.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchOutcome, UserAgentPool};
use crate::crawler::frontier::{Frontier, VisitedSet};
use crate::extract::Extractor;
use crate::state::CrawlState;
use crate::storage::{ContactStore, StorageError};
use crate::url::{is_internal_link, root_domain};
use crate::ScanError;
use reqwest::Client;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use url::Url;

/// Bounded wait for each dequeue attempt. Only a wakeup interval; the
/// completion count decides termination.
const DEQUEUE_WAIT: Duration = Duration::from_secs(5);

/// Everything the workers share for one run
struct WorkerContext {
    root_domain: String,
    client: Client,
    agents: UserAgentPool,
    extractor: Extractor,
    frontier: Frontier,
    visited: VisitedSet,
    store: ContactStore,
    aborted: AtomicBool,
    failure: Mutex<Option<StorageError>>,
}

impl WorkerContext {
    /// Records the first storage failure and tells every worker to stop
    fn fail(&self, err: StorageError) {
        let mut slot = self.failure.lock().unwrap();
        if slot.is_none() {
            *slot = Some(err);
        }
        self.aborted.store(true, Ordering::SeqCst);
    }
}

/// Main crawl coordinator structure
pub struct Coordinator {
    workers: usize,
    seed: Url,
    ctx: Arc<WorkerContext>,
}

impl Coordinator {
    /// Creates a new coordinator for one seed URL
    ///
    /// Derives the root domain from the seed, opens the per-domain store
    /// (reloading a prior record if one exists), and builds the shared HTTP
    /// client and user-agent pool.
    pub fn new(config: &Config, seed_url: &str) -> Result<Self, ScanError> {
        let seed = Url::parse(seed_url)
            .map_err(|_| ScanError::InvalidSeed(seed_url.to_string()))?;
        let root_domain =
            root_domain(&seed).ok_or_else(|| ScanError::MissingHost(seed_url.to_string()))?;

        let store = ContactStore::open(&config.output_dir, &root_domain)?;
        let client = build_http_client(config.fetch_timeout())?;

        tracing::info!(
            "Crawling {} with {} workers, record at {}",
            root_domain,
            config.workers,
            store.path().display()
        );

        let ctx = Arc::new(WorkerContext {
            extractor: Extractor::new(&root_domain),
            root_domain,
            client,
            agents: UserAgentPool::new(),
            frontier: Frontier::new(),
            visited: VisitedSet::new(),
            store,
            aborted: AtomicBool::new(false),
            failure: Mutex::new(None),
        });

        Ok(Self {
            workers: config.workers,
            seed,
            ctx,
        })
    }

    /// Runs the crawl to completion and returns the final persisted state
    ///
    /// The pool terminates once every enqueued URL has been marked processed.
    /// Elapsed time is recorded into the store as the last persisted write.
    pub async fn run(self) -> Result<CrawlState, ScanError> {
        let started = Instant::now();

        self.ctx.frontier.push(self.seed.to_string());

        let mut workers = JoinSet::new();
        for id in 0..self.workers {
            let ctx = Arc::clone(&self.ctx);
            workers.spawn(worker_loop(id, ctx));
        }

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                tracing::error!("worker task failed to join: {e}");
            }
        }

        if let Some(err) = self.ctx.failure.lock().unwrap().take() {
            return Err(err.into());
        }

        self.ctx.store.finish(started.elapsed().as_secs_f64())?;

        let state = self.ctx.store.snapshot();
        tracing::info!(
            "Crawl of {} finished: {} pages, {} emails, {} phones, {} social links in {:.2}s",
            self.ctx.root_domain,
            state.stats.total_pages_scraped,
            state.stats.extracted_emails,
            state.stats.extracted_phone_numbers,
            state.stats.total_social_media_links,
            state.stats.time_taken_to_scrape,
        );

        Ok(state)
    }
}

/// One worker: dequeue, claim, process, repeat until drained or aborted
async fn worker_loop(id: usize, ctx: Arc<WorkerContext>) {
    loop {
        if ctx.aborted.load(Ordering::SeqCst) || ctx.frontier.is_drained() {
            break;
        }

        // Timeout here is only a candidate-exit signal; loop back and let
        // the drain check decide
        let Some(url) = ctx.frontier.pop(DEQUEUE_WAIT).await else {
            continue;
        };

        if !ctx.visited.claim(&url) {
            ctx.frontier.task_done();
            continue;
        }

        let outcome = process_url(&ctx, &url).await;
        ctx.frontier.task_done();

        if let Err(err) = outcome {
            tracing::error!(worker = id, url = %url, "persisting state failed: {err}");
            ctx.fail(err);
            break;
        }
    }

    tracing::debug!(worker = id, "worker exiting");
}

/// Processes one claimed URL: fetch, extract, merge, enqueue
///
/// Fetch and parse problems drop the URL silently; only storage failures
/// bubble up.
async fn process_url(ctx: &WorkerContext, url: &str) -> Result<(), StorageError> {
    let body = match fetch_page(&ctx.client, &ctx.agents, url).await {
        FetchOutcome::Success { body } => body,
        FetchOutcome::Skip { reason } => {
            tracing::debug!(url, %reason, "skipping page");
            return Ok(());
        }
    };

    let Ok(page_url) = Url::parse(url) else {
        return Ok(());
    };
    let artifacts = ctx.extractor.extract(&body, &page_url);

    if is_internal_link(url, &ctx.root_domain) {
        ctx.store.record_page(url)?;
    }
    ctx.store.merge_emails(&artifacts.emails)?;
    ctx.store.merge_phones(&artifacts.phones)?;
    ctx.store.merge_social_links(&artifacts.social_links)?;

    for link in &artifacts.outbound_links {
        if is_internal_link(link, &ctx.root_domain) {
            ctx.frontier.push(link.clone());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_config(dir: &std::path::Path) -> Config {
        Config {
            workers: 4,
            fetch_timeout_secs: 2,
            output_dir: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_new_rejects_invalid_seed() {
        let dir = tempfile::tempdir().unwrap();
        let result = Coordinator::new(&test_config(dir.path()), "not a url");
        assert!(matches!(result, Err(ScanError::InvalidSeed(_))));
    }

    #[test]
    fn test_new_rejects_seed_without_host() {
        let dir = tempfile::tempdir().unwrap();
        let result = Coordinator::new(&test_config(dir.path()), "data:text/plain,hi");
        assert!(matches!(result, Err(ScanError::MissingHost(_))));
    }

    #[tokio::test]
    async fn test_unreachable_seed_drains_cleanly() {
        // Connection refused is a skip; the pool must still drain and write
        // the final stats block
        let dir = tempfile::tempdir().unwrap();
        let coordinator =
            Coordinator::new(&test_config(dir.path()), "http://127.0.0.1:1/").unwrap();

        let state = coordinator.run().await.unwrap();
        assert_eq!(state.stats.total_pages_scraped, 0);
        assert!(state.counters_consistent());
        assert!(dir.path().join("127.0.0.1.json").exists());
    }
}
