//! State module for the durable crawl record
//!
//! # Components
//!
//! - `CrawlState`: everything recorded for one root domain — artifacts plus stats
//! - `CrawlStats`: the summary counters polled by external collaborators

mod crawl_state;

// Re-export main types
pub use crawl_state::{CrawlState, CrawlStats};
