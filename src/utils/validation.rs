//! Shape checks for shortcodes and target URLs.
//!
//! Both functions are pure and never touch the store.

use regex::Regex;
use std::sync::LazyLock;

/// Exact length of every shortcode.
pub const SHORTCODE_LENGTH: usize = 6;

/// Scheme, host (domain, `localhost` or dotted quad), optional port, optional path/query.
///
/// The path excludes control characters so every accepted URL is a valid
/// `Location` header value.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:http|ftp)s?://",
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)|",
        r"localhost|",
        r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3})",
        r"(?::[0-9]+)?",
        r"(?:/?|[/?][^\s\x00-\x1F\x7F]+)$",
    ))
    .unwrap()
});

/// Returns true if `shortcode` is exactly six characters from `[A-Za-z0-9_]`.
pub fn is_valid_shortcode(shortcode: &str) -> bool {
    shortcode.len() == SHORTCODE_LENGTH
        && shortcode
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Returns true if `url` looks like an http(s) or ftp(s) URL.
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}
