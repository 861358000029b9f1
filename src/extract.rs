//! Content extraction from documentation pages
//!
//! Pulls candidate text fragments out of headings, paragraphs, list items and
//! table cells. Short blocks (navigation labels, button captions) are dropped.

use crate::config::ExtractorConfig;
use scraper::{Html, Selector};
use std::collections::BTreeSet;

/// Elements whose text is treated as documentation content
const CONTENT_SELECTOR: &str = "h1, h2, h3, p, li, td";

/// Extracts text fragments from one page
///
/// Each matching element's text nodes are trimmed, empty ones dropped, and the
/// rest joined with single spaces rather than concatenated: `Open the
/// <b>Security</b> tab` yields `Open the Security tab`. A fragment is kept only if it is longer than
/// `min_length` characters. Duplicates within the page are removed; the first
/// occurrence keeps its document position.
///
/// # Example
///
/// ```
/// use pulse_modules::extract::extract_fragments;
///
/// let html = "<h2>Short</h2><p>Install the plugin from the admin dashboard.</p>";
/// assert_eq!(
///     extract_fragments(html, 30),
///     vec!["Install the plugin from the admin dashboard.".to_string()]
/// );
/// ```
pub fn extract_fragments(html: &str, min_length: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut seen = BTreeSet::new();
    let mut fragments = Vec::new();

    let Ok(selector) = Selector::parse(CONTENT_SELECTOR) else {
        return fragments;
    };

    for element in document.select(&selector) {
        let text = element
            .text()
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if text.chars().count() > min_length && seen.insert(text.clone()) {
            fragments.push(text);
        }
    }

    fragments
}

/// Deduplicated fragments accumulated across every page of a run
///
/// Iteration order is lexicographic, so two runs that extract the same set of
/// fragments hand the classifier the same sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentSet {
    fragments: BTreeSet<String>,
}

impl FragmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a fragment; returns false if it was already present
    pub fn insert(&mut self, fragment: String) -> bool {
        self.fragments.insert(fragment)
    }

    /// Extracts a page's fragments into the set and returns how many were new
    pub fn extend_from_page(&mut self, html: &str, config: &ExtractorConfig) -> usize {
        extract_fragments(html, config.min_fragment_length)
            .into_iter()
            .filter(|fragment| self.insert(fragment.clone()))
            .count()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.fragments.contains(fragment)
    }

    /// Consumes the set into a vector in canonical order
    pub fn into_vec(self) -> Vec<String> {
        self.fragments.into_iter().collect()
    }
}

impl FromIterator<String> for FragmentSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            fragments: iter.into_iter().collect(),
        }
    }
}
