//! HTML escaping for untrusted message text.

use std::borrow::Cow;

/// Escape `&`, `<` and `>` so text can be placed inside element content.
///
/// This is the first stage of formatting. Quotes are left alone: the output
/// is only ever used as element content, never inside an attribute.
///
/// # Examples
///
/// ```
/// use chatmark_engine::escape_html;
///
/// assert_eq!(escape_html("a < b && c"), "a &lt; b &amp;&amp; c");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_tags() {
        assert_eq!(
            escape_html("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn escapes_ampersand_first() {
        // An existing entity is escaped again, not passed through
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn leaves_markdown_markers_alone() {
        assert_eq!(escape_html("**a** `b` _c_"), "**a** `b` _c_");
    }

    #[test]
    fn borrows_when_nothing_to_escape() {
        assert!(matches!(escape_html("nothing here"), Cow::Borrowed(_)));
    }
}
