//! Crawler module for page fetching and asset extraction
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching and outcome classification
//! - Sitemap bootstrap
//! - Asset classification over parsed markup
//! - The frontier-draining crawl engine

mod classifier;
mod engine;
mod fetcher;
mod sitemap;

pub use classifier::{classify, Classification};
pub use engine::{CrawlError, Crawler, PageRecord};
pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use sitemap::{extract_tag_values, load_seeds};

use crate::config::CrawlConfig;
use crate::report::{build, ReportEntry};
use crate::Result;

/// Outcome of a completed crawl run: the report entries in visit order
/// plus every failure recorded along the way.
#[derive(Debug)]
pub struct CrawlReport {
    /// One entry per visited page, in visit order
    pub pages: Vec<ReportEntry>,

    /// Fetch failures, in discovery order
    pub errors: Vec<CrawlError>,
}

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Seed the frontier from the sitemap (or the base URL alone)
/// 2. Fetch and classify pages until the frontier is empty
/// 3. Project the final visited map into the report shape
///
/// # Arguments
///
/// * `config` - The crawl configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed (possibly with per-page errors)
/// * `Err(AtlasError)` - Crawl could not start
pub async fn crawl(config: CrawlConfig) -> Result<CrawlReport> {
    let mut crawler = Crawler::new(config)?;
    crawler.run().await?;

    Ok(CrawlReport {
        pages: build(crawler.visited()),
        errors: crawler.errors().to_vec(),
    })
}
