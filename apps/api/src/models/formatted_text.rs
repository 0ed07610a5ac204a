//! Opaque rich-text payload produced by the editor's rich-text widget.
//!
//! The only transformation the layout engine performs on it is removing trailing
//! empty paragraphs (`<p></p>`, `<p><br></p>`, ...) left behind by the editor.
//! Everything else is emitted exactly as received; sanitization belongs to the
//! input layer.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Rich-text markup (bold/italic/underline/alignment/links) carried as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormattedText(String);

impl FormattedText {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    /// The markup exactly as received.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the raw payload. Height estimation works on this.
    pub fn char_len(&self) -> usize {
        self.as_str().chars().count()
    }

    /// True when nothing but whitespace and empty paragraphs remain.
    pub fn is_blank(&self) -> bool {
        self.trimmed().trim().is_empty()
    }

    /// The markup with every trailing empty paragraph removed.
    ///
    /// Stripping repeats until the tail no longer matches, so editor output like
    /// `<p>text</p><p><br></p><p></p>` reduces to `<p>text</p>`.
    pub fn trimmed(&self) -> &str {
        let pattern = trailing_empty_paragraph();
        let mut markup = self.as_str();
        while let Some(found) = pattern.find(markup) {
            markup = &markup[..found.start()];
        }
        markup
    }
}

impl From<&str> for FormattedText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FormattedText {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for FormattedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.trimmed())
    }
}

fn trailing_empty_paragraph() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)<p(?:\s[^>]*)?>(?:\s|&nbsp;|<br\s*/?>)*</p>\s*$")
            .expect("Invalid trailing paragraph regex")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_leaves_plain_text_untouched() {
        let text = FormattedText::from("Led the platform team.");
        assert_eq!(text.trimmed(), "Led the platform team.");
    }

    #[test]
    fn test_trimmed_strips_single_trailing_empty_paragraph() {
        let text = FormattedText::from("<p>Shipped v2</p><p><br></p>");
        assert_eq!(text.trimmed(), "<p>Shipped v2</p>");
    }

    #[test]
    fn test_trimmed_strips_repeated_trailing_paragraphs() {
        let text = FormattedText::from("<p>Shipped v2</p><p><br/></p>\n<p></p> <p>&nbsp;</p>");
        assert_eq!(text.trimmed(), "<p>Shipped v2</p>");
    }

    #[test]
    fn test_trimmed_keeps_leading_and_inner_empty_paragraphs() {
        let text = FormattedText::from("<p></p><p>a</p><p><br></p><p>b</p>");
        assert_eq!(text.trimmed(), "<p></p><p>a</p><p><br></p><p>b</p>");
    }

    #[test]
    fn test_trimmed_handles_aligned_paragraph_attributes() {
        let text = FormattedText::from("<p class=\"ql-align-center\">x</p><p class=\"ql-align-center\"><br></p>");
        assert_eq!(text.trimmed(), "<p class=\"ql-align-center\">x</p>");
    }

    #[test]
    fn test_is_blank_for_editor_leftovers() {
        assert!(FormattedText::default().is_blank());
        assert!(FormattedText::from("<p><br></p>").is_blank());
        assert!(FormattedText::from("   ").is_blank());
        assert!(!FormattedText::from("<p>hi</p>").is_blank());
    }

    #[test]
    fn test_char_len_counts_chars_not_bytes() {
        assert_eq!(FormattedText::from("Educación").char_len(), 9);
    }

    #[test]
    fn test_deserializes_from_plain_json_string() {
        let text: FormattedText = serde_json::from_str("\"<b>bold</b>\"").unwrap();
        assert_eq!(text.as_str(), "<b>bold</b>");
    }
}
