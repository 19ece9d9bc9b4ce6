//! URL-to-filename sanitization for screenshot path fragments.

use once_cell::sync::Lazy;
use regex::Regex;

// Also matches non-`www` three-character hosts like `api.`; kept for
// compatibility with existing output directory names.
static SCHEME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^http[s]?://(?:\w{3}\.)?").expect("scheme prefix pattern is valid"));

/// Convert a raw URL into a string safe for use as a path segment.
///
/// Strips a leading `http://`/`https://` scheme prefix (plus an optional
/// three-word-character-and-dot token such as `www.`), replaces every
/// remaining `/` with `-`, and drops a single trailing `-`. Other characters
/// (colons, query strings) pass through unchanged. Empty input yields empty
/// output.
///
/// # Examples
///
/// ```rust
/// use viewport_sweep::sanitize_url;
///
/// assert_eq!(sanitize_url("https://www.example.com/path/"), "example.com-path");
/// assert_eq!(sanitize_url("http://example.com"), "example.com");
/// ```
pub fn sanitize_url(url: &str) -> String {
    let stripped = SCHEME_PREFIX.replace(url, "");
    let mut fragment = stripped.replace('/', "-");

    if fragment.ends_with('-') {
        fragment.pop();
    }

    fragment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_scheme_and_www() {
        assert_eq!(sanitize_url("https://www.example.com/path/"), "example.com-path");
        assert_eq!(sanitize_url("http://www.example.com"), "example.com");
        assert_eq!(sanitize_url("http://example.com"), "example.com");
    }

    #[test]
    fn test_replaces_slashes_with_hyphens() {
        assert_eq!(sanitize_url("https://example.com/a/b/c"), "example.com-a-b-c");
        assert!(!sanitize_url("https://example.com/a/b/c/").contains('/'));
    }

    #[test]
    fn test_strips_single_trailing_hyphen() {
        assert_eq!(sanitize_url("https://example.com/"), "example.com");
        // Only one trailing hyphen is removed.
        assert_eq!(sanitize_url("example.com--"), "example.com-");
    }

    #[test]
    fn test_three_character_token_is_stripped() {
        // The prefix pattern matches any three word characters plus a dot,
        // not just "www".
        assert_eq!(sanitize_url("https://api.example.com"), "example.com");
        assert_eq!(sanitize_url("https://blog.example.com"), "blog.example.com");
    }

    #[test]
    fn test_idempotent_on_sanitized_input() {
        let once = sanitize_url("https://www.example.com/path/to/page");
        assert_eq!(sanitize_url(&once), once);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(sanitize_url(""), "");
    }

    #[test]
    fn test_unsanitized_characters_pass_through() {
        // Query strings and colons are not escaped.
        assert_eq!(
            sanitize_url("https://example.com/search?q=1"),
            "example.com-search?q=1"
        );
        assert_eq!(sanitize_url("https://example.com:8080"), "example.com:8080");
    }
}
