//! Output module for rendering classification results
//!
//! This module handles:
//! - Serializing results to the JSON wire format
//! - Generating markdown reports
//! - Recording run statistics

mod markdown;
pub mod stats;

pub use markdown::format_markdown;
pub use stats::{log_statistics, RunStats};

use crate::classifier::ClassificationResult;
use crate::PulseError;
use std::path::Path;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON array of modules
    #[default]
    Json,

    /// Markdown report with run statistics
    Markdown,
}

/// Serializes a result as pretty-printed JSON
///
/// # Example
///
/// ```
/// use pulse_modules::classifier::ClassificationResult;
/// use pulse_modules::output::to_json;
///
/// assert_eq!(to_json(&ClassificationResult::empty()).unwrap(), "[]");
/// ```
pub fn to_json(result: &ClassificationResult) -> Result<String, PulseError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Renders a result in the requested format
pub fn render(
    format: OutputFormat,
    result: &ClassificationResult,
    stats: &RunStats,
) -> Result<String, PulseError> {
    match format {
        OutputFormat::Json => to_json(result),
        OutputFormat::Markdown => Ok(format_markdown(result, stats)),
    }
}

/// Writes rendered output to a file, creating parent directories as needed
pub fn write_output(path: &Path, contents: &str) -> Result<(), PulseError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}
