//! Configuration for a crawl run
//!
//! Everything here is populated from the command line; there is no config
//! file. Defaults mirror the crawl contract: ten workers, a five second
//! fetch timeout, records written to the working directory.

use crate::ScanError;
use std::path::PathBuf;
use std::time::Duration;

/// Default size of the worker pool
pub const DEFAULT_WORKERS: usize = 10;

/// Default per-request fetch timeout in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;

/// Runtime configuration for a crawl
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of concurrent workers draining the frontier; fixed for the
    /// lifetime of the run
    pub workers: usize,

    /// Per-request fetch timeout in seconds
    pub fetch_timeout_secs: u64,

    /// Directory where per-domain record files are written
    pub output_dir: PathBuf,
}

impl Config {
    /// The fetch timeout as a `Duration`
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.workers == 0 {
            return Err(ScanError::Config(
                "worker count must be at least 1".to_string(),
            ));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(ScanError::Config(
                "fetch timeout must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            output_dir: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.workers, 10);
        assert_eq!(config.fetch_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = Config {
            workers: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = Config {
            fetch_timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
