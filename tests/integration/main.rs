//! Integration tests for the crawler and the full pipeline
//!
//! These tests use wiremock to create mock HTTP servers for documentation
//! sites and the remote model API.

mod crawl_tests;
mod pipeline_tests;
