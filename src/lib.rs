//! Contact-Sweep: a domain-scoped contact crawler
//!
//! This crate crawls a single website and extracts contact artifacts — email
//! addresses at the site's own domain, US phone numbers, and social-media
//! profile links — persisting progress and summary statistics after every
//! change so collaborators can poll the results file mid-crawl.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod state;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for contact-sweep operations
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Invalid seed URL: {0}")]
    InvalidSeed(String),

    #[error("Seed URL has no host: {0}")]
    MissingHost(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for contact-sweep operations
pub type Result<T> = std::result::Result<T, ScanError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::scan_site;
pub use state::{CrawlState, CrawlStats};
pub use storage::ContactStore;
