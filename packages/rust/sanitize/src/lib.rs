//! Text and URL sanitation for Freeplane attribute values.
//!
//! Everything written between the double quotes of a `TEXT="..."` or
//! `LINK="..."` attribute goes through this crate first:
//! - [`escape_text`] for display text (reserved characters plus a numeric
//!   character reference for anything outside printable ASCII)
//! - [`is_valid_url`] / [`validate_url`] to decide whether a URI may become a link
//! - [`escape_url`] for validated URLs (reserved characters only)

mod url;

use std::borrow::Cow;

pub use url::{UrlRejection, is_valid_url, validate_url};

// ---------------------------------------------------------------------------
// Reserved-character escaping
// ---------------------------------------------------------------------------

/// Replace the five XML markup characters with their predefined entities.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_reserved(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(raw)
}

// ---------------------------------------------------------------------------
// Display text
// ---------------------------------------------------------------------------

/// Escape arbitrary text for a double-quoted XML attribute.
///
/// Reserved characters become entities first; every remaining character
/// outside printable ASCII becomes `&#x<hex>;` (lowercase, unpadded).
pub fn escape_text(raw: &str) -> String {
    let reserved = escape_reserved(raw);

    let mut out = String::with_capacity(reserved.len());
    for c in reserved.chars() {
        if is_printable(c) {
            out.push(c);
        } else {
            out.push_str(&format!("&#x{:x};", u32::from(c)));
        }
    }
    out
}

/// ASCII letters, digits, punctuation, space, `\t`, `\n` and `\r`.
fn is_printable(c: char) -> bool {
    c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r')
}

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

/// Escape a URL that already passed [`is_valid_url`] for use as an attribute.
///
/// Only reserved characters are touched; the validator already guarantees
/// there is no whitespace or control character.
pub fn escape_url(url: &str) -> String {
    escape_reserved(url).into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_characters_become_entities() {
        assert_eq!(
            escape_text(r#"Tom & Jerry's <"show">"#),
            "Tom &amp; Jerry&apos;s &lt;&quot;show&quot;&gt;"
        );
    }

    #[test]
    fn safe_ascii_is_unchanged() {
        let safe = "Rust Book - Chapter 4: Ownership (2nd ed.) [draft] #1 100%";
        assert_eq!(escape_text(safe), safe);
        assert!(matches!(escape_reserved(safe), Cow::Borrowed(_)));
        // and stays unchanged when escaped again
        assert_eq!(escape_text(&escape_text(safe)), safe);
    }

    #[test]
    fn non_ascii_becomes_char_references() {
        assert_eq!(escape_text("Café"), "Caf&#xe9;");
        assert_eq!(escape_text("日本"), "&#x65e5;&#x672c;");
        assert_eq!(escape_text("rocket 🚀"), "rocket &#x1f680;");
    }

    #[test]
    fn control_characters_become_char_references() {
        assert_eq!(escape_text("a\u{0}b"), "a&#x0;b");
        assert_eq!(escape_text("bell\u{7}"), "bell&#x7;");
        assert_eq!(escape_text("del\u{7f}"), "del&#x7f;");
    }

    #[test]
    fn only_tab_newline_return_stay_raw() {
        assert_eq!(escape_text("a\tb\nc\rd"), "a\tb\nc\rd");
        // not XML characters, so never written raw
        assert_eq!(escape_text("\u{b}\u{c}"), "&#xb;&#xc;");
    }

    #[test]
    fn escaped_text_has_no_raw_markup() {
        let hostile = "\"><script>alert('x')</script>&\u{202e}";
        let escaped = escape_text(hostile);
        assert!(!escaped.contains('"'));
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('\''));
        assert!(escaped.is_ascii());
        // every ampersand starts an entity or character reference
        for (i, _) in escaped.match_indices('&') {
            assert!(escaped[i..].find(';').is_some(), "dangling & at {i}");
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(escape_text(""), "");
        assert_eq!(escape_url(""), "");
    }

    #[test]
    fn url_escaping_only_touches_reserved() {
        assert_eq!(
            escape_url("http://example.com/search?q=a&lang=en"),
            "http://example.com/search?q=a&amp;lang=en"
        );
        assert_eq!(escape_url("http://example.com/"), "http://example.com/");
    }

    #[test]
    fn reserved_escaping_reverses_with_unescape() {
        let raw = r#"Tom & "Jerry" <it's>"#;
        let escaped = escape_reserved(raw);
        assert_eq!(escaped, "Tom &amp; &quot;Jerry&quot; &lt;it&apos;s&gt;");
        assert_eq!(quick_xml::escape::unescape(&escaped).expect("unescape"), raw);
    }
}
