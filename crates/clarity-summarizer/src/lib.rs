//! Clarity Summarizer
//!
//! The summarization request pipeline: prompt building, request pacing,
//! rate-limit retries and error classification, plus the page-level service
//! that ties extraction, settings and status reporting together.
//!
//! # Architecture
//!
//! ```text
//! TextSource → TextExtractor → PageSummarizer → SummaryClient → SummaryProvider
//!                                   │                 │
//!                              SettingsStore     RequestPacer ─ Clock
//!                                                RetryPolicy
//! ```
//!
//! Each attempt (retries included) first waits for its turn at the pacer,
//! which enforces a minimum interval between sends and records the send time
//! immediately before the network call. HTTP 429 responses are retried with
//! exponential backoff (2s, 4s, 8s by default); every other failure is
//! terminal and classified into a [`SummarizeError`].
//!
//! # Example Usage
//!
//! ```no_run
//! use clarity_domain::{SummaryRequest, SummaryStyle};
//! use clarity_llm::GeminiProvider;
//! use clarity_summarizer::{SummarizerConfig, SummaryClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = GeminiProvider::default_endpoint()?;
//! let client = SummaryClient::new(provider, &SummarizerConfig::default());
//!
//! let request = SummaryRequest::new(
//!     "Long article text...",
//!     SummaryStyle::Bullets,
//!     "gemini-1.5-flash",
//!     "my-api-key",
//! );
//! let summary = client.summarize(&request).await?;
//! println!("{}", summary);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod clock;
mod config;
mod error;
mod pacing;
mod prompt;
mod retry;
mod service;
mod settings;


pub use client::SummaryClient;
pub use clock::{Clock, ManualClock, TokioClock};
pub use config::SummarizerConfig;
pub use error::SummarizeError;
pub use pacing::RequestPacer;
pub use prompt::{build_prompt, truncate_chars, PromptBuilder, CONNECTION_TEST_PROMPT, MAX_PROMPT_CHARS};
pub use retry::RetryPolicy;
pub use service::PageSummarizer;
pub use settings::{MemorySettingsStore, Settings, SettingsError, SettingsStore};
