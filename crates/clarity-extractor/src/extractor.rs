//! Core text extraction

use crate::config::ExtractorConfig;
use clarity_domain::TextSource;
use tracing::debug;

/// Collapse every whitespace run to a single space and trim the ends
///
/// The byte-order mark counts as whitespace, as it does for browser regexes.
pub fn normalize_whitespace(text: &str) -> String {
    text.split(is_page_whitespace)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_page_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Builds bounded plain text from a [`TextSource`]
#[derive(Debug, Clone, Default)]
pub struct TextExtractor {
    config: ExtractorConfig,
}

impl TextExtractor {
    /// Create a new extractor
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Get the extractor configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the text to summarize
    ///
    /// Returns the trimmed selection when there is a non-empty one, otherwise
    /// walks the document. An empty string means there is nothing to
    /// summarize.
    pub fn extract<S: TextSource + ?Sized>(&self, source: &S) -> String {
        if let Some(selection) = source
            .selection()
            .map(|s| s.trim_matches(is_page_whitespace))
            .filter(|s| !s.is_empty())
        {
            debug!("Using selection ({} chars)", selection.chars().count());
            return selection.to_string();
        }

        self.extract_document(source)
    }

    /// Walk the document's text nodes, ignoring any selection
    pub fn extract_document<S: TextSource + ?Sized>(&self, source: &S) -> String {
        let mut text = String::new();
        let mut char_count = 0usize;
        let mut nodes_used = 0usize;

        for node in source.text_nodes() {
            let normalized = normalize_whitespace(node);
            if normalized.is_empty() {
                continue;
            }

            if !text.is_empty() {
                text.push(' ');
                char_count += 1;
            }
            char_count += normalized.chars().count();
            text.push_str(&normalized);
            nodes_used += 1;

            if char_count > self.config.max_chars {
                debug!(
                    "Extraction reached cap of {} chars after {} nodes",
                    self.config.max_chars, nodes_used
                );
                break;
            }
        }

        debug!("Extracted {} chars from {} text nodes", char_count, nodes_used);
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlainText;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a \n\t b  "), "a b");
        assert_eq!(normalize_whitespace("\n\n"), "");
        assert_eq!(normalize_whitespace("single"), "single");
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert_eq!(normalize_whitespace("\u{FEFF} a\u{FEFF}b "), "a b");

        let extractor = TextExtractor::default();
        let page = PlainText::new("a\n\u{FEFF}\nb");
        assert_eq!(extractor.extract(&page), "a b");

        let page = PlainText::new("doc").with_selection("\u{FEFF}");
        assert_eq!(extractor.extract(&page), "doc");
    }

    #[test]
    fn test_empty_source_yields_empty_string() {
        let extractor = TextExtractor::default();
        assert_eq!(extractor.extract(&PlainText::new("")), "");
        assert_eq!(extractor.extract(&PlainText::new("   \n \n")), "");
    }

    #[test]
    fn test_joins_nodes_with_single_space() {
        let extractor = TextExtractor::default();
        let source = PlainText::new("first  line\n\n   second\tline  \nthird");
        assert_eq!(extractor.extract(&source), "first line second line third");
    }

    #[test]
    fn test_node_crossing_cap_is_kept_whole() {
        let extractor = TextExtractor::new(ExtractorConfig { max_chars: 10 });
        let source = PlainText::new("aaaaaaaa\nbbbbbbbb\ncccccccc");
        // 8 chars, then 8 + 1 + 8 = 17 > 10, stop
        assert_eq!(extractor.extract(&source), "aaaaaaaa bbbbbbbb");
    }

    #[test]
    fn test_exactly_at_cap_keeps_walking() {
        let extractor = TextExtractor::new(ExtractorConfig { max_chars: 3 });
        let source = PlainText::new("abc\nd\ne");
        // "abc" is exactly 3, not over; "abc d" is 5 > 3, stop
        assert_eq!(extractor.extract(&source), "abc d");
    }

    #[test]
    fn test_selection_takes_precedence() {
        let extractor = TextExtractor::default();
        let source = PlainText::new("document text").with_selection("  chosen   words \n");
        // Selection is trimmed but not otherwise normalized
        assert_eq!(extractor.extract(&source), "chosen   words");
        assert_eq!(extractor.extract_document(&source), "document text");
    }

    #[test]
    fn test_blank_selection_is_ignored() {
        let extractor = TextExtractor::default();
        let source = PlainText::new("document text").with_selection(" \n\t ");
        assert_eq!(extractor.extract(&source), "document text");
    }
}
