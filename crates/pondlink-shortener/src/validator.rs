use regex::Regex;
use std::sync::LazyLock;

/// Optional http(s) scheme, a dotted host name, then anything without
/// whitespace.
static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?[\w-]+(\.[\w-]+)+\S*$").expect("link pattern is a valid regex")
});

/// Decides whether a submitted link may be stored.
pub trait LinkValidator: Send + Sync + 'static {
    fn is_acceptable(&self, link: &str) -> bool;
}

/// Accepts links that look like a web address, with or without a scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlPatternValidator;

impl LinkValidator for UrlPatternValidator {
    fn is_acceptable(&self, link: &str) -> bool {
        LINK_PATTERN.is_match(link)
    }
}

/// Accepts everything. Only for callers that validate links themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl LinkValidator for AcceptAll {
    fn is_acceptable(&self, _link: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_links() {
        let validator = UrlPatternValidator;
        assert!(validator.is_acceptable("https://example.com"));
        assert!(validator.is_acceptable("http://example.com/path?q=1#frag"));
        assert!(validator.is_acceptable("example.com"));
        assert!(validator.is_acceptable("sub-domain.example.co.uk/a/b"));
    }

    #[test]
    fn rejects_malformed_links() {
        let validator = UrlPatternValidator;
        assert!(!validator.is_acceptable(""));
        assert!(!validator.is_acceptable("not-a-valid-url"));
        assert!(!validator.is_acceptable("https://"));
        assert!(!validator.is_acceptable("ftp://example.com"));
        assert!(!validator.is_acceptable("https://example.com/with space"));
    }

    #[test]
    fn accept_all_accepts_anything() {
        assert!(AcceptAll.is_acceptable(""));
        assert!(AcceptAll.is_acceptable("not a link"));
    }
}
