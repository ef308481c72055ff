//! HTML page source backed by `scraper`

use clarity_domain::TextSource;
use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page
///
/// Text nodes are taken from `<body>` only, in document order, the way a
/// browser tree walker over `document.body` sees them.
pub struct HtmlPage {
    document: Html,
    selection: Option<String>,
}

impl HtmlPage {
    /// Parse a full HTML document
    ///
    /// Parsing is lenient and never fails; malformed markup is repaired the
    /// way browsers repair it.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
            selection: None,
        }
    }

    /// Attach a user selection
    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = Some(selection.into());
        self
    }

    /// The document title, if present and non-empty
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        let title = self.document.select(&selector).next()?;
        let text = crate::normalize_whitespace(&title.text().collect::<String>());
        (!text.is_empty()).then_some(text)
    }

    fn body(&self) -> ElementRef<'_> {
        let root = self.document.root_element();
        root.children()
            .filter_map(ElementRef::wrap)
            .find(|element| element.value().name() == "body")
            .unwrap_or(root)
    }
}

impl TextSource for HtmlPage {
    fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    fn text_nodes(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.body().text())
    }
}

impl std::fmt::Debug for HtmlPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlPage")
            .field("title", &self.title())
            .field("has_selection", &self.selection.is_some())
            .finish()
    }
}
