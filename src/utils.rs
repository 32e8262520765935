//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

/// Get the app data directory path (settings, logs)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Get the cache directory path
pub fn get_cache_dir() -> PathBuf {
    get_data_dir().join("cache")
}

/// File name a poster URL is cached under, e.g. `.../w500/abc.jpg` -> `abc.jpg`.
/// Returns `None` for URLs without a usable final segment.
pub fn poster_cache_name(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let name = path.rsplit('/').next()?;
    let sanitized: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    if sanitized.is_empty() || sanitized.chars().all(|c| c == '.') {
        None
    } else {
        Some(sanitized)
    }
}
