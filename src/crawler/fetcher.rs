//! HTTP fetcher implementation
//!
//! One GET per URL, one chance: non-200 responses, timeouts, and connection
//! errors all come back as a skip, never a retry. Each request carries a
//! client-identity header drawn at random from an explicit pool.

use rand::seq::SliceRandom;
use reqwest::{header, Client, StatusCode};
use std::time::Duration;

/// Browser identities sampled per request
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:124.0) Gecko/20100101 Firefox/124.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36 Edg/123.0.2420.81",
];

/// Pool of client identities, one drawn at random for each request
///
/// Constructed once per crawl and passed by reference into the fetcher —
/// an explicit dependency, not a global.
#[derive(Debug, Clone)]
pub struct UserAgentPool {
    agents: Vec<&'static str>,
}

impl UserAgentPool {
    /// Creates a pool with the built-in browser identities
    pub fn new() -> Self {
        Self {
            agents: USER_AGENTS.to_vec(),
        }
    }

    /// Picks one identity at random
    pub fn random(&self) -> &str {
        self.agents
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(USER_AGENTS[0])
    }
}

impl Default for UserAgentPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of fetching a single page
#[derive(Debug)]
pub enum FetchOutcome {
    /// HTTP 200 with body text
    Success {
        /// Page body content
        body: String,
    },

    /// Anything else; the URL is dropped without retry
    Skip {
        /// Short description of why the page was skipped
        reason: String,
    },
}

/// Builds the shared HTTP client with the fixed per-request timeout
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one page
///
/// Success means exactly HTTP 200 and a readable body. Every failure mode —
/// non-200 status, timeout, connection error, unreadable body — maps to
/// [`FetchOutcome::Skip`], the deliberate best-effort policy.
pub async fn fetch_page(client: &Client, agents: &UserAgentPool, url: &str) -> FetchOutcome {
    let request = client
        .get(url)
        .header(header::USER_AGENT, agents.random());

    match request.send().await {
        Ok(response) => {
            let status = response.status();
            if status != StatusCode::OK {
                return FetchOutcome::Skip {
                    reason: format!("HTTP {status}"),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success { body },
                Err(e) => FetchOutcome::Skip {
                    reason: format!("body read failed: {e}"),
                },
            }
        }
        Err(e) if e.is_timeout() => FetchOutcome::Skip {
            reason: "request timeout".to_string(),
        },
        Err(e) if e.is_connect() => FetchOutcome::Skip {
            reason: "connection error".to_string(),
        },
        Err(e) => FetchOutcome::Skip {
            reason: e.to_string(),
        },
    }
}
