//! Trait definitions for external interactions
//!
//! Implementations live in other crates (`clarity-extractor` provides the
//! HTML and plain-text sources).

/// A document that can be walked as a sequence of text nodes
pub trait TextSource {
    /// Text the user has selected, if any
    ///
    /// A selection that is empty after trimming is treated as no selection.
    fn selection(&self) -> Option<&str> {
        None
    }

    /// Raw text nodes in document order
    ///
    /// The iterator is consumed lazily so extraction can stop early.
    fn text_nodes(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}
