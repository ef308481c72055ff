//! Error types for the Summarizer

use clarity_llm::LlmError;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by a summarization run
///
/// Every variant renders as a message fit to show to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    /// Missing or unreadable configuration (e.g. no API key)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Nothing to summarize
    #[error("{0}")]
    Input(String),

    /// HTTP 429 after all retries
    #[error("Rate limit exceeded. Please wait a few minutes and try again.")]
    RateLimit,

    /// HTTP 403
    #[error("API key is invalid or doesn't have access to this model.")]
    Auth,

    /// HTTP 400, or a response body that could not be parsed
    #[error("Invalid request ({0}). Please check your API key and model settings.")]
    Request(String),

    /// Any other non-success status
    #[error("{provider} error ({status}): {message}")]
    Provider {
        /// Provider name
        provider: String,
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },

    /// No candidates, or a candidate with no text
    #[error("{0}")]
    EmptyResponse(String),

    /// The provider filtered the answer
    #[error("{0} blocked the response due to safety filters.")]
    SafetyBlocked(String),

    /// Caller-side deadline exceeded
    #[error("Request timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),

    /// Network failure before a status was received
    #[error("Network error: {0}")]
    Network(String),
}

impl SummarizeError {
    /// Error for a missing API key
    pub fn missing_api_key(provider: &str) -> Self {
        SummarizeError::Config(format!(
            "Missing API key. Set your {} API key in settings.",
            provider
        ))
    }

    /// Classify a provider failure
    pub fn from_provider(error: LlmError, provider: &str) -> Self {
        match error {
            LlmError::Communication(message) => SummarizeError::Network(message),
            LlmError::RateLimited(_) => SummarizeError::RateLimit,
            LlmError::Unauthorized(_) => SummarizeError::Auth,
            LlmError::InvalidRequest(details) => SummarizeError::Request(details),
            LlmError::Provider { status, message } => SummarizeError::Provider {
                provider: provider.to_string(),
                status,
                message,
            },
            LlmError::InvalidResponse(details) => {
                SummarizeError::Request(format!("malformed provider response: {}", details))
            }
            LlmError::EmptyResponse(message) => SummarizeError::EmptyResponse(message),
            LlmError::SafetyBlocked => SummarizeError::SafetyBlocked(provider.to_string()),
        }
    }
}
