//! Configuration module for Asset-Atlas
//!
//! This module provides the crawl configuration types, optional TOML
//! preferences files, and base-URL validation.

mod parser;
mod types;
mod validation;

// Re-export main types and functions
pub use parser::load_preferences;
pub use types::{CrawlConfig, Preferences};
pub use validation::{is_url_valid, validate};
