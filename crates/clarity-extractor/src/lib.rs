//! Clarity Extractor
//!
//! Turns a page into a bounded, whitespace-normalized plain-text string that
//! can be handed to the summarizer.
//!
//! # Overview
//!
//! ```text
//! TextSource (HTML page, plain text) → TextExtractor → String
//! ```
//!
//! - A non-empty user selection wins over the document and is returned trimmed.
//! - Otherwise text nodes are walked in document order, each one normalized
//!   and trimmed, and joined with single spaces.
//! - Walking stops once the joined text exceeds `max_chars`. The node that
//!   crosses the limit is kept whole, so the cap is a soft stop.
//!
//! # Example Usage
//!
//! ```
//! use clarity_extractor::{HtmlPage, TextExtractor};
//!
//! let page = HtmlPage::parse("<html><body><p>Hello   <b>world</b></p></body></html>");
//! let text = TextExtractor::default().extract(&page);
//! assert_eq!(text, "Hello world");
//! ```

#![warn(missing_docs)]

mod config;
mod extractor;
mod html;
mod plain;


pub use config::{ExtractorConfig, DEFAULT_MAX_CHARS};
pub use extractor::{normalize_whitespace, TextExtractor};
pub use html::HtmlPage;
pub use plain::PlainText;
