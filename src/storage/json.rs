//! JSON persistence with atomic replace
//!
//! The record is always rewritten whole: serialize to a sibling temporary
//! file, then rename over the target. A failed write leaves the previous
//! valid record untouched.

use crate::state::CrawlState;
use crate::storage::StorageResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Builds the path of the durable record for a root domain
///
/// The file is named after the root domain so a later run against the same
/// site reloads and extends prior results.
pub fn state_file_path(output_dir: &Path, root_domain: &str) -> PathBuf {
    output_dir.join(format!("{root_domain}.json"))
}

/// Loads the crawl state from disk
///
/// A missing file is not an error: it yields an empty initial state.
pub fn load_state(path: &Path) -> StorageResult<CrawlState> {
    if !path.exists() {
        return Ok(CrawlState::new());
    }

    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Writes the crawl state to disk via atomic replace
pub fn save_state(path: &Path, state: &CrawlState) -> StorageResult<()> {
    let json = serde_json::to_string_pretty(state)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
