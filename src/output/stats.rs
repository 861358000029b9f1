//! Run statistics
//!
//! Counters collected while the pipeline runs, reported at the end of a run
//! and included in the markdown report.

use crate::classifier::Strategy;

/// Statistics for one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Seeds that passed validation and were crawled
    pub seeds_accepted: usize,

    /// Seeds rejected as malformed
    pub seeds_skipped: usize,

    /// URLs the crawler attempted to fetch, over all seeds
    pub pages_attempted: usize,

    /// Pages fetched successfully
    pub pages_fetched: usize,

    /// Unique fragments handed to the classifier
    pub fragments: usize,

    /// Modules in the final result
    pub modules: usize,

    /// Strategy that produced the result; None if the classifier was not run
    pub strategy: Option<Strategy>,
}

impl RunStats {
    /// Number of fetch attempts that failed
    pub fn pages_failed(&self) -> usize {
        self.pages_attempted.saturating_sub(self.pages_fetched)
    }

    /// Percentage of fetch attempts that succeeded
    pub fn fetch_success_rate(&self) -> f64 {
        if self.pages_attempted == 0 {
            0.0
        } else {
            (self.pages_fetched as f64 / self.pages_attempted as f64) * 100.0
        }
    }

    /// Human-readable name of the strategy used
    pub fn strategy_label(&self) -> String {
        self.strategy
            .map(|s| s.to_string())
            .unwrap_or_else(|| "not run (no content)".to_string())
    }
}

/// Logs statistics at info level
pub fn log_statistics(stats: &RunStats) {
    tracing::info!(
        "Seeds: {} crawled, {} skipped",
        stats.seeds_accepted,
        stats.seeds_skipped
    );
    tracing::info!(
        "Pages: {} fetched, {} failed ({:.1}% success)",
        stats.pages_fetched,
        stats.pages_failed(),
        stats.fetch_success_rate()
    );
    tracing::info!(
        "Fragments: {}, modules: {}, classifier: {}",
        stats.fragments,
        stats.modules,
        stats.strategy_label()
    );
}
