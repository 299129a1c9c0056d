//! Crawl engine
//!
//! This module owns the frontier and the visited map and drives the
//! sequential fetch → classify → enqueue loop until the frontier is
//! empty. All crawl state lives on a per-run [`Crawler`] instance that is
//! discarded after report generation.

use crate::config::CrawlConfig;
use crate::crawler::classifier::{classify, Classification};
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchOutcome};
use crate::crawler::sitemap::load_seeds;
use crate::url::UrlScope;
use crate::Result;
use indexmap::IndexMap;
use reqwest::Client;
use scraper::Html;
use std::collections::HashSet;

/// Assets recorded against one visited page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRecord {
    /// Asset URLs in discovery order
    pub assets: Vec<String>,
}

/// A fetch failure recorded during the crawl.
#[derive(Debug, Clone)]
pub struct CrawlError {
    /// The page URL that failed
    pub url: String,

    /// Failure description
    pub message: String,
}

/// Crawl engine for a single run.
///
/// The frontier, visited map and error log are owned and mutated
/// exclusively by the engine's own control loop; no URL is ever present
/// in both the frontier and the visited map at the same time, and a
/// visited entry is never mutated after its initial population.
pub struct Crawler {
    scope: UrlScope,
    config: CrawlConfig,
    client: Client,
    frontier: HashSet<String>,
    visited: IndexMap<String, PageRecord>,
    errors: Vec<CrawlError>,
}

impl Crawler {
    /// Creates a crawl engine for the configured base URL.
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to run
    /// * `Err(AtlasError)` - Base URL unparseable or HTTP client build failed
    pub fn new(config: CrawlConfig) -> Result<Self> {
        let scope = UrlScope::new(&config.base_url, &config.preferences.unwanted_extensions)?;
        let client = build_http_client()?;

        Ok(Self {
            scope,
            config,
            client,
            frontier: HashSet::new(),
            visited: IndexMap::new(),
            errors: Vec::new(),
        })
    }

    /// Runs the crawl to completion: seed the frontier, then drain it.
    ///
    /// Individual page failures are isolated into the error log and never
    /// abort the crawl; non-success statuses are dropped without an error
    /// entry. The loop terminates when the frontier is exhausted.
    pub async fn run(&mut self) -> Result<()> {
        let start = std::time::Instant::now();

        self.seed().await;

        while let Some(page_url) = self.next_unvisited() {
            tracing::debug!("processing {}", page_url);

            match fetch_page(&self.client, &page_url).await {
                FetchOutcome::Response { status_code, body } if (200..300).contains(&status_code) => {
                    self.record_page(&page_url, &body);
                }
                FetchOutcome::Response { status_code, .. } => {
                    tracing::debug!("dropping {} (HTTP {})", page_url, status_code);
                }
                FetchOutcome::TransportError { error } => {
                    tracing::warn!("failed to fetch {}: {}", page_url, error);
                    self.errors.push(CrawlError {
                        url: page_url,
                        message: error,
                    });
                }
            }
        }

        tracing::info!(
            "crawl complete: {} pages visited, {} errors in {:?}",
            self.visited.len(),
            self.errors.len(),
            start.elapsed()
        );

        Ok(())
    }

    /// Seeds the frontier from the sitemap, falling back to the base URL
    /// alone when the sitemap yields nothing.
    async fn seed(&mut self) {
        self.frontier = load_seeds(&self.client, self.scope.base()).await;

        if self.frontier.is_empty() {
            self.frontier.insert(self.scope.base().to_string());
        }

        tracing::info!("frontier seeded with {} URLs", self.frontier.len());
    }

    /// Pops an arbitrary element from the frontier. Pop order is not part
    /// of the crawl contract.
    fn next_unvisited(&mut self) -> Option<String> {
        let next = self.frontier.iter().next().cloned()?;
        self.frontier.remove(&next);
        Some(next)
    }

    /// Records a successfully fetched page: inserts its visited entry,
    /// classifies its markup, and enqueues unvisited follow candidates.
    ///
    /// A page already present in the visited map is left untouched, so
    /// reprocessing a URL is a no-op.
    fn record_page(&mut self, page_url: &str, body: &str) {
        if self.visited.contains_key(page_url) {
            return;
        }

        // The entry is inserted before classification so the page's own
        // key participates in the raw-href visited test.
        self.visited
            .insert(page_url.to_string(), PageRecord::default());

        let document = Html::parse_document(body);
        let Classification { assets, follow } = classify(
            &document,
            &self.scope,
            &self.config.preferences,
            &self.visited,
        );

        if let Some(record) = self.visited.get_mut(page_url) {
            record.assets = assets;
        }

        for candidate in follow {
            if !self.visited.contains_key(&candidate) {
                self.frontier.insert(candidate);
            }
        }
    }

    /// The visited map in insertion order.
    pub fn visited(&self) -> &IndexMap<String, PageRecord> {
        &self.visited
    }

    /// Failures recorded during the run, in discovery order.
    pub fn errors(&self) -> &[CrawlError] {
        &self.errors
    }
}
