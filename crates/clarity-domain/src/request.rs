//! Requests flowing from the summarizer to a provider

use crate::SummaryStyle;

/// Sampling temperature used for every summary; kept low for stable output
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// A request to summarize a block of text
///
/// The prompt is always derived from these fields and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRequest {
    /// Extracted page text
    pub text: String,

    /// Requested summary style
    pub style: SummaryStyle,

    /// Provider model name (e.g. "gemini-1.5-flash")
    pub model: String,

    /// Provider API key
    pub api_key: String,
}

impl SummaryRequest {
    /// Create a new summary request
    pub fn new(
        text: impl Into<String>,
        style: SummaryStyle,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            style,
            model: model.into(),
            api_key: api_key.into(),
        }
    }
}

/// A fully built prompt ready to be sent to a provider
#[derive(Clone, PartialEq)]
pub struct GenerationRequest {
    /// Prompt text
    pub prompt: String,

    /// Provider model name
    pub model: String,

    /// Provider API key
    pub api_key: String,

    /// Sampling temperature
    pub temperature: f64,
}

impl GenerationRequest {
    /// Create a generation request with the default temperature
    pub fn new(
        prompt: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            api_key: api_key.into(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Override the sampling temperature
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

// Keys must never end up in logs through `{:?}`.
impl std::fmt::Debug for GenerationRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationRequest")
            .field("prompt_len", &self.prompt.len())
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("temperature", &self.temperature)
            .finish()
    }
}
