//! Asset classification over parsed markup
//!
//! Given a parsed page, this module decides which tag/attribute
//! combinations denote static assets to record and which hrefs are
//! candidate pages to crawl next.

use crate::config::Preferences;
use crate::crawler::engine::PageRecord;
use crate::url::{resolve, UrlScope};
use indexmap::IndexMap;
use scraper::{Html, Selector};

/// Tag types inspected for asset and link references, in the fixed order
/// their findings are recorded.
const TAG_ORDER: &[&str] = &["img", "script", "source", "a", "link"];

/// `<link rel>` tokens whose href denotes a static asset.
const ASSET_RELS: &[&str] = &[
    "stylesheet",
    "icon",
    "apple-touch-icon",
    "apple-touch-icon-precomposed",
];

/// Suffixes marking a resolved href as a terminal binary document:
/// recorded as an asset, never crawled.
const TERMINAL_SUFFIXES: &[&str] = &[".png", ".pdf"];

/// URLs extracted from one page, split by role.
#[derive(Debug, Default)]
pub struct Classification {
    /// Static asset URLs in discovery order
    pub assets: Vec<String>,

    /// In-scope page URLs eligible for the frontier
    pub follow: Vec<String>,
}

/// Classifies every element of a parsed page into assets and follow
/// candidates.
///
/// Elements are visited per tag type in [`TAG_ORDER`], in document order
/// within each type:
///
/// * a `src` attribute is always an asset, whatever the tag;
/// * a `link` element's first `rel` token either suppresses the element
///   (configured unwanted rels) or records its href as an asset
///   (stylesheet/icon rels);
/// * any href whose RAW value is not already a visited-map key and that
///   passes the scope test becomes a follow candidate, unless it resolves
///   to a terminal binary document, in which case it is an asset.
pub fn classify(
    document: &Html,
    scope: &UrlScope,
    preferences: &Preferences,
    visited: &IndexMap<String, PageRecord>,
) -> Classification {
    let mut classification = Classification::default();

    for tag in TAG_ORDER {
        let selector = match Selector::parse(tag) {
            Ok(selector) => selector,
            Err(_) => continue,
        };

        for element in document.select(&selector) {
            if let Some(src) = element.value().attr("src") {
                classification.assets.push(resolve(scope.base(), src));
            }

            if let Some(href) = element.value().attr("href") {
                if *tag == "link" {
                    let rel = element
                        .value()
                        .attr("rel")
                        .and_then(|rel| rel.split_whitespace().next());

                    if let Some(rel) = rel {
                        if preferences.unwanted_links.iter().any(|u| u == rel) {
                            continue;
                        }
                        if ASSET_RELS.contains(&rel) {
                            classification.assets.push(resolve(scope.base(), href));
                        }
                    }
                }

                if !visited.contains_key(href) && scope.is_valid(href) {
                    let resolved = resolve(scope.base(), href);

                    if TERMINAL_SUFFIXES.iter().any(|s| resolved.ends_with(s)) {
                        classification.assets.push(resolved);
                    } else {
                        classification.follow.push(resolved);
                    }
                }
            }
        }
    }

    classification
}
