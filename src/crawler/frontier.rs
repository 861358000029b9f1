//! Breadth-first crawl frontier
//!
//! The frontier owns the FIFO queue of pending URLs and the visited set for a
//! single crawl invocation. Visited checks happen twice: when a link is offered
//! (so high fan-out pages do not grow the queue with known URLs) and again when
//! a URL is popped (a URL may have been queued before it was visited through an
//! earlier entry).

use std::collections::{HashSet, VecDeque};

/// FIFO frontier plus visited set, bounded by a page limit
#[derive(Debug)]
pub struct Frontier {
    /// URLs waiting to be fetched, in discovery order
    queue: VecDeque<String>,

    /// URLs currently sitting in `queue`
    queued: HashSet<String>,

    /// URLs already attempted in this crawl
    visited: HashSet<String>,

    /// Maximum number of URLs that may be attempted
    page_limit: usize,
}

impl Frontier {
    /// Creates a frontier seeded with a single URL
    pub fn new(seed: &str, page_limit: usize) -> Self {
        let mut frontier = Self {
            queue: VecDeque::new(),
            queued: HashSet::new(),
            visited: HashSet::new(),
            page_limit,
        };
        frontier.enqueue(seed);
        frontier
    }

    /// Offers a URL to the frontier
    ///
    /// Returns false if the URL was already visited or is already queued.
    pub fn enqueue(&mut self, url: &str) -> bool {
        if self.visited.contains(url) || self.queued.contains(url) {
            return false;
        }

        self.queued.insert(url.to_string());
        self.queue.push_back(url.to_string());
        true
    }

    /// Pops the next URL to fetch
    ///
    /// Returns None once the page limit is reached or the queue runs dry.
    /// Entries that were visited after being queued are skipped.
    pub fn next_url(&mut self) -> Option<String> {
        if self.limit_reached() {
            return None;
        }

        while let Some(url) = self.queue.pop_front() {
            self.queued.remove(&url);
            if self.visited.contains(&url) {
                tracing::trace!("Skipping already visited URL: {}", url);
                continue;
            }
            return Some(url);
        }

        None
    }

    /// Records that a URL has been attempted
    pub fn mark_visited(&mut self, url: &str) {
        self.visited.insert(url.to_string());
    }

    /// Returns true if the URL has been attempted
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Returns true once as many URLs as the page limit have been attempted
    pub fn limit_reached(&self) -> bool {
        self.visited.len() >= self.page_limit
    }

    /// Number of URLs attempted so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of URLs waiting in the queue
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }
}
