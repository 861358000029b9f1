//! Pulse Modules: documentation module extraction
//!
//! This crate crawls a product's documentation pages, extracts their text and
//! groups it into a module/submodule taxonomy, using a remote model when one is
//! configured and a deterministic rule-based classifier otherwise.

pub mod classifier;
pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod url;

use thiserror::Error;

/// Main error type for Pulse Modules operations
///
/// Only setup and output steps can fail; crawling and classification always
/// produce a (possibly empty) result.
#[derive(Debug, Error)]
pub enum PulseError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Invalid seed URL: {0}")]
    InvalidSeed(String),

    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),
}

/// Result type alias for Pulse Modules operations
pub type Result<T> = std::result::Result<T, PulseError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use classifier::{ClassificationResult, Classifier, Module, RemoteCapability, Strategy};
pub use config::Config;
pub use crawler::{CrawledPages, Crawler};
pub use output::{OutputFormat, RunStats};
pub use pipeline::{parse_seed_list, Pipeline};
