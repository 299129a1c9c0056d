use url::Url;

/// Resolves a possibly-relative reference against the crawl base.
///
/// Standard URL-resolution rules apply: scheme and host inheritance,
/// `.`/`..` segment collapsing, query and fragment preserved. Resolution
/// is best-effort: a reference the `url` crate cannot join is returned
/// unchanged rather than dropped.
pub fn resolve(base: &Url, reference: &str) -> String {
    match base.join(reference) {
        Ok(absolute) => absolute.to_string(),
        Err(_) => reference.to_string(),
    }
}
