use crate::config::types::CrawlConfig;
use crate::ConfigError;
use regex::Regex;

/// Pattern a user-supplied base URL must match before any crawl work
/// begins: an absolute HTTP(S) URL with a plausible registered domain.
const BASE_URL_PATTERN: &str =
    r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,6}\b([-a-zA-Z0-9@:%_+.~#?&/=]*)$";

/// Validates the entire crawl configuration.
pub fn validate(config: &CrawlConfig) -> Result<(), ConfigError> {
    validate_base_url(&config.base_url)
}

/// Validates a user-supplied base URL against [`BASE_URL_PATTERN`].
fn validate_base_url(url: &str) -> Result<(), ConfigError> {
    if is_url_valid(url) {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl(url.to_string()))
    }
}

/// True iff the URL matches the absolute-HTTP(S) base URL pattern.
pub fn is_url_valid(url: &str) -> bool {
    Regex::new(BASE_URL_PATTERN)
        .map(|pattern| pattern.is_match(url))
        .unwrap_or(false)
}
