use serde::Deserialize;

/// Link `rel` tokens omitted from classification by default: speculative
/// fetch hints that do not denote page content.
const DEFAULT_UNWANTED_LINKS: &[&str] =
    &["prefetch", "dns-prefetch", "preconnect", "preload", "pingback"];

/// URL extensions treated as known circular redirects by default:
/// fragment-only anchors and CDN passthrough paths.
const DEFAULT_UNWANTED_EXTENSIONS: &[&str] = &["#", "/#", "/cdn-cgi/"];

/// Crawl preferences, supplied once at configuration time and immutable
/// for the lifetime of a crawl.
#[derive(Debug, Clone, Deserialize)]
pub struct Preferences {
    /// `<link rel>` tokens to omit entirely from classification
    #[serde(rename = "unwanted-links", default = "default_unwanted_links")]
    pub unwanted_links: Vec<String>,

    /// URL extension patterns identifying known redirect loops
    #[serde(
        rename = "unwanted-extensions",
        default = "default_unwanted_extensions"
    )]
    pub unwanted_extensions: Vec<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            unwanted_links: default_unwanted_links(),
            unwanted_extensions: default_unwanted_extensions(),
        }
    }
}

fn default_unwanted_links() -> Vec<String> {
    DEFAULT_UNWANTED_LINKS.iter().map(|s| s.to_string()).collect()
}

fn default_unwanted_extensions() -> Vec<String> {
    DEFAULT_UNWANTED_EXTENSIONS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Full configuration for one crawl run.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Base URL the crawl is scoped to
    pub base_url: String,

    /// Link-relation and extension preferences
    pub preferences: Preferences,
}

impl CrawlConfig {
    /// Creates a configuration with default preferences.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            preferences: Preferences::default(),
        }
    }
}
