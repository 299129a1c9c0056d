use crate::url::resolve;
use crate::UrlError;
use regex::Regex;
use url::Url;

/// Character class permitted after the base prefix for a URL to remain in
/// scope.
const PERMITTED_URL_CHARS: &str = "[-a-zA-Z0-9@:%_+.~#?&/=]";

/// Scope-membership tests for one crawl.
///
/// Scope is a string-prefix containment test against the configured base
/// URL, not a structural host comparison: a candidate is in scope iff its
/// resolved form is the base string followed only by permitted URL
/// characters. The known-redirect patterns additionally suppress URLs of
/// the form `base + extension + <permitted-char-run>`, which are presumed
/// to loop back without new content.
///
/// Patterns are built from the base URL string exactly as configured
/// (trailing slash or not), so the extension patterns compose the way the
/// operator wrote them.
pub struct UrlScope {
    base: Url,
    in_scope: Regex,
    known_redirects: Vec<Regex>,
}

impl UrlScope {
    /// Compiles the scope patterns for a base URL and the configured
    /// unwanted extensions.
    pub fn new(base_url: &str, unwanted_extensions: &[String]) -> Result<Self, UrlError> {
        let base = Url::parse(base_url).map_err(|e| UrlError::Parse(e.to_string()))?;
        let escaped_base = regex::escape(base_url);

        let in_scope = Regex::new(&format!("^{}{}*$", escaped_base, PERMITTED_URL_CHARS))
            .map_err(|e| UrlError::Pattern(e.to_string()))?;

        let known_redirects = unwanted_extensions
            .iter()
            .map(|extension| {
                Regex::new(&format!(
                    "^{}{}{}*",
                    escaped_base,
                    regex::escape(extension),
                    PERMITTED_URL_CHARS
                ))
                .map_err(|e| UrlError::Pattern(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            base,
            in_scope,
            known_redirects,
        })
    }

    /// The parsed base URL this scope was built from.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// True iff the candidate begins with the base URL followed only by
    /// permitted URL characters.
    pub fn in_scope(&self, candidate: &str) -> bool {
        self.in_scope.is_match(candidate)
    }

    /// True iff the candidate matches any configured circular-redirect
    /// pattern.
    pub fn is_known_redirect(&self, candidate: &str) -> bool {
        self.known_redirects
            .iter()
            .any(|pattern| pattern.is_match(candidate))
    }

    /// Resolves a raw reference against the base, then checks that it is
    /// in scope and not a known redirect.
    pub fn is_valid(&self, reference: &str) -> bool {
        let resolved = resolve(&self.base, reference);
        self.in_scope(&resolved) && !self.is_known_redirect(&resolved)
    }
}
