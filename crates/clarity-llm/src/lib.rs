//! Clarity LLM Provider Layer
//!
//! Pluggable summary providers behind the [`SummaryProvider`] trait.
//!
//! # Providers
//!
//! - `GeminiProvider`: Google Generative Language `generateContent` API
//! - `OpenAiProvider`: OpenAI chat completions API
//! - `AnyProvider`: runtime selection of exactly one of the above
//! - `MockProvider`: scripted responses for testing
//!
//! Providers perform exactly one HTTP call per [`SummaryProvider::generate`]
//! and classify the outcome into an [`LlmError`]. Pacing and retries are the
//! caller's job (see `clarity-summarizer`).
//!
//! # Examples
//!
//! ```
//! use clarity_domain::GenerationRequest;
//! use clarity_llm::{MockProvider, SummaryProvider};
//!
//! # async fn example() {
//! let provider = MockProvider::new("A brief summary.");
//! let request = GenerationRequest::new("Summarize this", "mock-model", "key");
//! assert_eq!(provider.generate(&request).await.unwrap(), "A brief summary.");
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;
pub mod openai;
mod mock;
mod provider;

use clarity_domain::GenerationRequest;
use std::future::Future;
use thiserror::Error;

pub use gemini::GeminiProvider;
pub use mock::MockProvider;
pub use openai::OpenAiProvider;
pub use provider::{AnyProvider, ProviderKind};

/// Errors that can occur during a provider call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// Network failure before any HTTP status was received
    #[error("Communication error: {0}")]
    Communication(String),

    /// HTTP 429
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// HTTP 403
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// HTTP 400
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Any other non-success status
    #[error("Provider error ({status}): {message}")]
    Provider {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// Success status but the body could not be parsed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No candidates, or a candidate with no text
    #[error("Empty response: {0}")]
    EmptyResponse(String),

    /// The provider withheld the answer for safety reasons
    #[error("Response blocked by safety filters")]
    SafetyBlocked,
}

impl LlmError {
    /// Classify a non-success HTTP status
    pub fn from_status(status: u16, details: impl Into<String>) -> Self {
        let details = details.into();
        match status {
            429 => LlmError::RateLimited(details),
            403 => LlmError::Unauthorized(details),
            400 => LlmError::InvalidRequest(details),
            _ => LlmError::Provider {
                status,
                message: details,
            },
        }
    }

    /// Whether the call may succeed if retried later
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, LlmError::RateLimited(_))
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        // Gemini carries the API key in the query string; never echo URLs.
        let e = e.without_url();
        if e.is_decode() {
            LlmError::InvalidResponse(e.to_string())
        } else {
            LlmError::Communication(format!("Request failed: {}", e))
        }
    }
}

/// A backend that turns one prompt into one model answer
pub trait SummaryProvider: Send + Sync {
    /// Short provider name used in logs and messages
    fn name(&self) -> &'static str;

    /// Send the prompt and return the trimmed, non-empty answer
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<String, LlmError>> + Send;
}

/// Pull a readable message out of an error response body
///
/// Prefers `error.message` from a JSON body, then the whole JSON body, then
/// the raw text.
pub(crate) async fn read_error_details(response: reqwest::Response) -> String {
    let body = match response.text().await {
        Ok(body) => body,
        Err(_) => return "Unknown error".to_string(),
    };
    error_details_from_body(&body)
}

pub(crate) fn error_details_from_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json
            .pointer("/error/message")
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| json.to_string()),
        Err(_) => body.trim().to_string(),
    }
}

/// Build `{endpoint}/{segments...}` without double slashes
pub(crate) fn endpoint_url(endpoint: &str, segments: &[&str]) -> Result<reqwest::Url, LlmError> {
    let mut url = reqwest::Url::parse(endpoint)
        .map_err(|e| LlmError::InvalidRequest(format!("Invalid endpoint '{}': {}", endpoint, e)))?;
    url.path_segments_mut()
        .map_err(|_| LlmError::InvalidRequest(format!("Endpoint '{}' cannot be a base URL", endpoint)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}
