//! Storage module for the durable crawl record
//!
//! One JSON file per root domain, rewritten in full after every merge so that
//! external collaborators always see a complete, consistent snapshot.

mod json;
mod store;

use thiserror::Error;

pub use json::{load_state, save_state, state_file_path};
pub use store::ContactStore;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
