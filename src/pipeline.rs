//! Pipeline coordinator
//!
//! Runs the crawler over each seed, extracts fragments from every fetched
//! page into one shared set and classifies the set exactly once.

use crate::classifier::{ClassificationResult, Classifier, RemoteCapability};
use crate::config::{Config, ExtractorConfig};
use crate::crawler::Crawler;
use crate::extract::FragmentSet;
use crate::output::RunStats;
use crate::url::parse_seed;
use crate::PulseError;

/// Splits a comma-separated list of URLs
///
/// Entries are trimmed and empty entries dropped; no validation happens here.
///
/// # Example
///
/// ```
/// use pulse_modules::parse_seed_list;
///
/// assert_eq!(
///     parse_seed_list(" https://a.com/docs, ,https://b.com/help "),
///     vec!["https://a.com/docs", "https://b.com/help"]
/// );
/// ```
pub fn parse_seed_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Crawl, extract and classify
pub struct Pipeline {
    crawler: Crawler,
    classifier: Classifier,
    extractor: ExtractorConfig,
    page_limit: usize,
}

impl Pipeline {
    /// Builds a pipeline from configuration
    ///
    /// # Arguments
    ///
    /// * `config` - Validated configuration
    /// * `capability` - Whether the remote classifier may be used
    ///
    /// # Returns
    ///
    /// * `Ok(Pipeline)` - Ready to run
    /// * `Err(PulseError)` - The HTTP client could not be built
    pub fn new(config: &Config, capability: RemoteCapability) -> Result<Self, PulseError> {
        let crawler = Crawler::new(config)?;
        let page_limit = crawler.default_page_limit();
        Ok(Self::from_parts(
            crawler,
            Classifier::new(&config.classifier, capability),
            config.extractor.clone(),
            page_limit,
        ))
    }

    /// Assembles a pipeline from already-built components
    pub fn from_parts(
        crawler: Crawler,
        classifier: Classifier,
        extractor: ExtractorConfig,
        page_limit: usize,
    ) -> Self {
        Self {
            crawler,
            classifier,
            extractor,
            page_limit,
        }
    }

    /// Runs the pipeline over the seeds
    ///
    /// Never fails: invalid seeds are skipped, unreachable pages are dropped and
    /// classification falls back to rules. No content yields an empty result.
    pub async fn run<S: AsRef<str>>(&self, seeds: &[S]) -> ClassificationResult {
        self.run_with_report(seeds).await.0
    }

    /// Runs the pipeline and also returns run statistics
    pub async fn run_with_report<S: AsRef<str>>(
        &self,
        seeds: &[S],
    ) -> (ClassificationResult, RunStats) {
        let mut stats = RunStats::default();
        let mut fragments = FragmentSet::new();

        for seed in seeds {
            let seed = seed.as_ref();
            let seed_url = match parse_seed(seed) {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!("Skipping seed: {}", e);
                    stats.seeds_skipped += 1;
                    continue;
                }
            };
            stats.seeds_accepted += 1;

            let pages = self.crawler.crawl(&seed_url, self.page_limit).await;
            stats.pages_attempted += pages.attempted();
            stats.pages_fetched += pages.len();

            for page in pages {
                let added = fragments.extend_from_page(&page.body, &self.extractor);
                tracing::debug!("{}: {} new fragments", page.url, added);
            }
        }

        stats.fragments = fragments.len();

        if fragments.is_empty() {
            tracing::info!("No content extracted, skipping classification");
            return (ClassificationResult::empty(), stats);
        }

        tracing::info!("Classifying {} fragments", fragments.len());
        let (result, strategy) = self
            .classifier
            .classify_with_strategy(&fragments.into_vec())
            .await;

        stats.modules = result.len();
        stats.strategy = Some(strategy);

        (result, stats)
    }
}
