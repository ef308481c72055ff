//! Clarity Domain Layer
//!
//! Core value types and trait interfaces shared by every other Clarity crate.
//! Apart from `serde` derives this crate has no external dependencies; the
//! HTTP providers, the HTML parser and the settings file all live elsewhere.
//!
//! ## Key Concepts
//!
//! - **Summary style**: how long and in what shape the summary should be
//! - **Summary request**: text plus the style, model and key used to summarize it
//! - **Generation request**: the fully built prompt handed to a provider
//! - **Outcome**: the last summary, or the last failure, kept for display
//! - **Text source**: anything that can be walked as a sequence of text nodes

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod outcome;
pub mod request;
pub mod style;
pub mod traits;

// Re-exports for convenience
pub use outcome::SummaryOutcome;
pub use request::{GenerationRequest, SummaryRequest, DEFAULT_TEMPERATURE};
pub use style::SummaryStyle;
pub use traits::TextSource;
