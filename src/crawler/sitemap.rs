//! Sitemap bootstrap
//!
//! This module probes the well-known `/sitemap.xml` location and extracts
//! `<loc>` entries as crawl seeds. Extraction is a regex over the raw
//! text rather than a full XML parse: malformed documents still yield
//! seeds as long as their `<loc>` pairs are well-formed single-line
//! entries.

use crate::crawler::fetcher::{fetch_page, FetchOutcome};
use crate::url::resolve;
use regex::Regex;
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// Fetches `base + "/sitemap.xml"` and returns the seed URLs it lists,
/// resolved against the base.
///
/// Sitemap unavailability is never fatal: client-error and server-error
/// responses, and transport failures, all degrade to an empty seed set so
/// the caller can fall back to base-URL seeding.
pub async fn load_seeds(client: &Client, base: &Url) -> HashSet<String> {
    let sitemap_url = format!("{}/sitemap.xml", base.as_str().trim_end_matches('/'));

    match fetch_page(client, &sitemap_url).await {
        FetchOutcome::Response { status_code, body } => match status_code / 100 {
            2 => extract_tag_values(&body, "loc")
                .iter()
                .map(|loc| resolve(base, loc))
                .collect(),
            4 => {
                tracing::info!("sitemap.xml not found at {}", sitemap_url);
                HashSet::new()
            }
            5 => {
                tracing::warn!("unknown server error when retrieving {}", sitemap_url);
                HashSet::new()
            }
            _ => HashSet::new(),
        },
        FetchOutcome::TransportError { error } => {
            tracing::warn!("failed to retrieve {}: {}", sitemap_url, error);
            HashSet::new()
        }
    }
}

/// Extracts every value enclosed by `<tag>…</tag>` pairs in a
/// sitemap-like document.
///
/// The tag name is a parameter so the same primitive serves any
/// single-line `<tag>value</tag>` pattern, including namespaced tags such
/// as `content:hash`. Values are runs of `[./:0-9a-zA-Z-]` characters;
/// entries spanning multiple lines are not matched.
pub fn extract_tag_values(content: &str, tag: &str) -> Vec<String> {
    let escaped = regex::escape(tag);
    let pattern = format!(r"<{0}>\s?([./:0-9a-zA-Z-]+)\s?</{0}>", escaped);

    let matcher = match Regex::new(&pattern) {
        Ok(matcher) => matcher,
        Err(_) => return Vec::new(),
    };

    matcher
        .captures_iter(content)
        .map(|captures| captures[1].to_string())
        .collect()
}
