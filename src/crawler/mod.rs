//! Crawler module for documentation page discovery
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a bounded timeout and no retries
//! - HTML parsing and link extraction
//! - The breadth-first frontier and visited set
//! - The crawl loop applying domain and topical filters

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::{CrawledPages, Crawler, PageRecord};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use frontier::Frontier;
pub use parser::{discover_links, parse_html, ParsedPage};
