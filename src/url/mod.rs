//! URL handling module for Pulse Modules
//!
//! This module provides seed validation, domain (origin) extraction and the
//! topical keyword filter applied to discovered links.

mod domain;
mod matcher;

use crate::{UrlError, UrlResult};
use url::Url;

// Re-export main functions
pub use domain::{extract_origin, same_domain};
pub use matcher::matches_topic;

/// Returns true if the string looks like an absolute HTTP/HTTPS URL
///
/// This is a purely syntactic prefix check (`^https?://`); it does not try to
/// parse the rest of the URL.
///
/// # Examples
///
/// ```
/// use pulse_modules::url::is_valid_seed;
///
/// assert!(is_valid_seed("https://wordpress.org/documentation/"));
/// assert!(!is_valid_seed("wordpress.org/documentation/"));
/// ```
pub fn is_valid_seed(candidate: &str) -> bool {
    candidate.starts_with("http://") || candidate.starts_with("https://")
}

/// Validates and parses a seed URL
///
/// # Returns
///
/// * `Ok(Url)` - The parsed seed
/// * `Err(UrlError)` - The seed is not an absolute HTTP(S) URL or has no host
pub fn parse_seed(candidate: &str) -> UrlResult<Url> {
    if !is_valid_seed(candidate) {
        return Err(UrlError::InvalidSeed(candidate.to_string()));
    }

    let url = Url::parse(candidate).map_err(|e| UrlError::Parse(format!("{}: {}", candidate, e)))?;

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost(candidate.to_string()));
    }

    Ok(url)
}
