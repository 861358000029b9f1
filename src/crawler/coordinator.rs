//! Crawler coordinator - breadth-first crawl of one seed
//!
//! This module contains the crawl loop that ties the frontier, the fetcher and
//! the link discoverer together:
//! - Pops URLs in FIFO order until the frontier is empty or the page limit hits
//! - Fetches each URL once; failures are logged and dropped
//! - Follows only same-domain links whose URL carries a topical keyword
//! - Drops `#fragment` parts before queueing, so anchors never cause refetches

use crate::config::{Config, CrawlerConfig};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::parse_html;
use crate::crawler::{build_http_client, fetch_url, FetchResult};
use crate::url::{matches_topic, same_domain};
use crate::PulseError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// One successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// The URL as it was requested
    pub url: String,

    /// Raw page content
    pub body: String,
}

/// Pages fetched by a single crawl, in discovery order
#[derive(Debug, Clone, Default)]
pub struct CrawledPages {
    pages: Vec<PageRecord>,
    attempted: usize,
}

impl CrawledPages {
    /// Number of successfully fetched pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Number of URLs the crawl tried to fetch, failures included
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// Number of fetch attempts that failed
    pub fn failed(&self) -> usize {
        self.attempted - self.pages.len()
    }

    /// Returns the content fetched for a URL, if any
    pub fn get(&self, url: &str) -> Option<&str> {
        self.pages
            .iter()
            .find(|page| page.url == url)
            .map(|page| page.body.as_str())
    }

    pub fn contains(&self, url: &str) -> bool {
        self.get(url).is_some()
    }

    /// Iterates over the fetched URLs in discovery order
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|page| page.url.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageRecord> {
        self.pages.iter()
    }
}

impl IntoIterator for CrawledPages {
    type Item = PageRecord;
    type IntoIter = std::vec::IntoIter<PageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.into_iter()
    }
}

impl<'a> IntoIterator for &'a CrawledPages {
    type Item = &'a PageRecord;
    type IntoIter = std::slice::Iter<'a, PageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

/// Bounded, same-domain, breadth-first documentation crawler
pub struct Crawler {
    client: Client,
    config: CrawlerConfig,
}

impl Crawler {
    /// Creates a crawler with an HTTP client built from the configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to crawl
    /// * `Err(PulseError)` - The HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, PulseError> {
        let timeout = Duration::from_secs(config.crawler.request_timeout_secs);
        let client = build_http_client(&config.user_agent, timeout)?;
        Ok(Self::with_client(client, config.crawler.clone()))
    }

    /// Creates a crawler around an existing HTTP client
    pub fn with_client(client: Client, config: CrawlerConfig) -> Self {
        Self { client, config }
    }

    /// Page limit from the crawler configuration
    pub fn default_page_limit(&self) -> usize {
        self.config.max_pages
    }

    /// Crawls documentation pages reachable from `seed`
    ///
    /// # Behavior
    ///
    /// 1. Pop the head of the frontier; skip it if already visited
    /// 2. Mark it visited and fetch it once (no retry)
    /// 3. On failure, drop the URL and continue
    /// 4. On success, record the page and offer each discovered link that
    ///    - shares the seed's scheme, host and port,
    ///    - contains a topical keyword anywhere in the URL, fragment included,
    ///    - has not been visited once its fragment is dropped
    /// 5. Stop when the frontier is empty or `page_limit` URLs were attempted
    ///
    /// Never fails: returning fewer pages than the limit is normal.
    pub async fn crawl(&self, seed: &Url, page_limit: usize) -> CrawledPages {
        let mut frontier = Frontier::new(seed.as_str(), page_limit);
        let mut result = CrawledPages::default();

        tracing::info!("Crawling {} (limit {} pages)", seed, page_limit);

        while let Some(current) = frontier.next_url() {
            frontier.mark_visited(&current);
            result.attempted += 1;

            tracing::debug!("Fetching {}", current);

            let (final_url, body) = match fetch_url(&self.client, &current).await {
                FetchResult::Success {
                    final_url,
                    status_code,
                    body,
                } => {
                    tracing::trace!("{} returned {}", current, status_code);
                    (final_url, body)
                }
                FetchResult::HttpError { status_code } => {
                    tracing::debug!("Skipping {}: HTTP {}", current, status_code);
                    continue;
                }
                FetchResult::NetworkError { error } | FetchResult::RedirectError { error } => {
                    tracing::debug!("Skipping {}: {}", current, error);
                    continue;
                }
            };

            // Relative links resolve against where the server actually sent us
            let base = Url::parse(&final_url)
                .or_else(|_| Url::parse(&current))
                .unwrap_or_else(|_| seed.clone());
            let parsed = parse_html(&body, &base);

            tracing::debug!(
                "Fetched {} ({}), {} links",
                current,
                parsed.title.as_deref().unwrap_or("untitled"),
                parsed.links.len()
            );

            for link in &parsed.links {
                if let Some(target) = self.follow_target(seed, link) {
                    frontier.enqueue(&target);
                }
            }

            result.pages.push(PageRecord { url: current, body });
        }

        tracing::info!(
            "Crawl of {} finished: {} pages fetched, {} attempted, {} still queued",
            seed,
            result.len(),
            result.attempted,
            frontier.queued_count()
        );

        result
    }

    /// Applies the domain and topical filters to a discovered link
    ///
    /// The topical filter runs on the link exactly as resolved. The returned
    /// URL is what gets queued: the same link without its fragment.
    fn follow_target(&self, seed: &Url, link: &str) -> Option<String> {
        let mut parsed = Url::parse(link).ok()?;

        if !same_domain(seed, &parsed) || !matches_topic(link, &self.config.topic_keywords) {
            return None;
        }

        parsed.set_fragment(None);
        Some(parsed.to_string())
    }
}
