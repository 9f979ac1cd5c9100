//! Output escaping helpers.
//!
//! Deterministic pure functions over the `html-escape` crate; these are not
//! platform capabilities because no embedding environment changes their
//! meaning.

use html_escape::{encode_double_quoted_attribute, encode_text};
use url::Url;

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp", "mailto", "tel"];

/// Escape text for an HTML text node.
pub fn esc_html(s: &str) -> String {
    encode_text(s).into_owned()
}

/// Escape text for a double-quoted HTML attribute value.
pub fn esc_attr(s: &str) -> String {
    encode_double_quoted_attribute(s).into_owned()
}

/// Sanitize and escape a URL for use in an `href` attribute.
///
/// Absolute URLs with a scheme outside the allowlist (`javascript:`,
/// `data:`, ...) become the empty string. Relative URLs pass through.
/// Characters that could terminate the attribute or open markup are
/// percent-encoded, then ampersands are entity-encoded.
pub fn esc_url(s: &str) -> String {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if let Ok(url) = Url::parse(trimmed) {
        if !ALLOWED_SCHEMES.contains(&url.scheme()) {
            return String::new();
        }
    }

    let mut encoded = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            ' ' => encoded.push_str("%20"),
            '<' => encoded.push_str("%3C"),
            '>' => encoded.push_str("%3E"),
            '"' => encoded.push_str("%22"),
            '\'' => encoded.push_str("%27"),
            c => encoded.push(c),
        }
    }

    encode_double_quoted_attribute(&encoded).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_esc_html_escapes_markup() {
        assert_eq!(
            esc_html("<b>Tom & Jerry</b>"),
            "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"
        );
    }

    #[test]
    fn test_esc_attr_escapes_quotes_and_ampersands() {
        let escaped = esc_attr(r#"say "hi" & wave"#);
        assert!(!escaped.contains('"'));
        assert!(escaped.contains("&quot;"));
        assert!(escaped.contains("&amp;"));
    }

    #[test]
    fn test_esc_url_keeps_http_and_encodes_ampersand() {
        let escaped = esc_url("https://example.com/a?x=1&y=2");
        assert!(escaped.starts_with("https://example.com/a?x=1"));
        assert!(escaped.contains("&amp;y"));
        assert!(!escaped.contains("&y=2"));
    }

    #[test]
    fn test_esc_url_rejects_javascript() {
        assert_eq!(esc_url("javascript:alert(1)"), "");
        assert_eq!(esc_url("data:text/html,<b>x</b>"), "");
    }

    #[test]
    fn test_esc_url_passes_relative() {
        assert_eq!(esc_url("/about/team/"), "/about/team/");
    }

    #[test]
    fn test_esc_url_has_no_raw_markup_characters() {
        let escaped = esc_url("/a b/<x>\"y\"");
        assert!(!escaped.contains(' '));
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('"'));
        assert_eq!(escaped, "/a%20b/%3Cx%3E%22y%22");
    }

    #[test]
    fn test_esc_url_empty() {
        assert_eq!(esc_url("   "), "");
    }
}
