//! URL handling module for Contact-Sweep
//!
//! This module provides root-domain derivation, the frontier admission
//! predicate, and the clean transform used for social-link comparison.

mod domain;
mod filter;

// Re-export main functions
pub use domain::{root_domain, strip_www};
pub use filter::{clean_url, is_internal_link};
