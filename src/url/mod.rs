//! URL handling module for Asset-Atlas
//!
//! This module provides relative-reference resolution against the crawl
//! origin and the scope-membership tests that bound the crawl.

mod resolve;
mod scope;

// Re-export main functions
pub use resolve::resolve;
pub use scope::UrlScope;
