//! The shared aggregate store
//!
//! `ContactStore` owns the in-memory crawl state behind a single mutex and is
//! the only writer of the durable record. Workers call one merge operation per
//! artifact category; each non-empty merge appends the new items, bumps the
//! matching counter, and rewrites the whole record before the lock is
//! released. Up to four full-state writes can happen per processed page —
//! synchronous persistence throttling the crawl is an accepted tradeoff.

use crate::state::CrawlState;
use crate::storage::{load_state, save_state, state_file_path, StorageResult};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Lock-guarded aggregate of everything the crawl has found.
///
/// Collections are never handed out mutably; observation goes through
/// [`ContactStore::snapshot`].
pub struct ContactStore {
    path: PathBuf,
    inner: Mutex<CrawlState>,
}

impl ContactStore {
    /// Opens the store for a root domain, reloading a prior record if one
    /// exists
    pub fn open(output_dir: &Path, root_domain: &str) -> StorageResult<Self> {
        let path = state_file_path(output_dir, root_domain);
        let state = load_state(&path)?;

        Ok(Self {
            path,
            inner: Mutex::new(state),
        })
    }

    /// Records one scraped page URL
    ///
    /// Returns `true` if the page was new. Already-recorded pages leave the
    /// state untouched and trigger no write.
    pub fn record_page(&self, url: &str) -> StorageResult<bool> {
        let mut state = self.inner.lock().unwrap();
        if state.page_urls.iter().any(|u| u == url) {
            return Ok(false);
        }

        state.page_urls.push(url.to_string());
        state.stats.total_pages_scraped += 1;
        save_state(&self.path, &state)?;
        Ok(true)
    }

    /// Merges newly extracted emails, skipping any already recorded
    ///
    /// Returns the number of emails actually added.
    pub fn merge_emails(&self, candidates: &[String]) -> StorageResult<usize> {
        let mut state = self.inner.lock().unwrap();
        let added = append_new(&mut state.emails, candidates);
        if added > 0 {
            state.stats.extracted_emails += added as u64;
            save_state(&self.path, &state)?;
        }
        Ok(added)
    }

    /// Merges newly extracted phone numbers, skipping any already recorded
    pub fn merge_phones(&self, candidates: &[String]) -> StorageResult<usize> {
        let mut state = self.inner.lock().unwrap();
        let added = append_new(&mut state.phone_numbers, candidates);
        if added > 0 {
            state.stats.extracted_phone_numbers += added as u64;
            save_state(&self.path, &state)?;
        }
        Ok(added)
    }

    /// Merges newly extracted social links, skipping any whose exact cleaned
    /// URL string is already recorded
    pub fn merge_social_links(&self, candidates: &[String]) -> StorageResult<usize> {
        let mut state = self.inner.lock().unwrap();
        let added = append_new(&mut state.social_media, candidates);
        if added > 0 {
            state.stats.total_social_media_links += added as u64;
            save_state(&self.path, &state)?;
        }
        Ok(added)
    }

    /// Records total elapsed seconds and writes the final state
    pub fn finish(&self, elapsed_secs: f64) -> StorageResult<()> {
        let mut state = self.inner.lock().unwrap();
        state.stats.time_taken_to_scrape = (elapsed_secs * 100.0).round() / 100.0;
        save_state(&self.path, &state)
    }

    /// Returns a clone of the current state
    pub fn snapshot(&self) -> CrawlState {
        self.inner.lock().unwrap().clone()
    }

    /// Path of the durable record backing this store
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Appends candidates not already present, preserving candidate order
fn append_new(existing: &mut Vec<String>, candidates: &[String]) -> usize {
    let mut added = 0;
    for candidate in candidates {
        if !existing.iter().any(|e| e == candidate) {
            existing.push(candidate.clone());
            added += 1;
        }
    }
    added
}
