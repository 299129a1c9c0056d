//! Report projection
//!
//! Projects the final visited map into the externally consumed shape: an
//! ordered sequence of `{url, assets}` records, serializable as pretty
//! JSON.

use crate::crawler::PageRecord;
use indexmap::IndexMap;
use serde::Serialize;

/// One visited page and the assets it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// The page URL
    pub url: String,

    /// Asset URLs in discovery order
    pub assets: Vec<String>,
}

/// Projects the visited map into report entries, preserving insertion
/// order.
pub fn build(visited: &IndexMap<String, PageRecord>) -> Vec<ReportEntry> {
    visited
        .iter()
        .map(|(url, record)| ReportEntry {
            url: url.clone(),
            assets: record.assets.clone(),
        })
        .collect()
}

/// Serializes report entries as pretty-printed JSON.
pub fn to_pretty_json(entries: &[ReportEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}
