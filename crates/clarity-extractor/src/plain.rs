//! Plain-text source where every line is a text node

use clarity_domain::TextSource;

/// A plain-text document, walked line by line
#[derive(Debug, Clone, Default)]
pub struct PlainText {
    text: String,
    selection: Option<String>,
}

impl PlainText {
    /// Wrap a block of text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: None,
        }
    }

    /// Attach a user selection
    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = Some(selection.into());
        self
    }
}

impl TextSource for PlainText {
    fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    fn text_nodes(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.text.lines())
    }
}
