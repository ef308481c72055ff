//! Runtime provider selection

use crate::{gemini, openai, GeminiProvider, LlmError, OpenAiProvider, SummaryProvider};
use clarity_domain::GenerationRequest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which backend a deployment talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google Gemini
    #[default]
    Gemini,

    /// OpenAI chat completions
    OpenAi,
}

impl ProviderKind {
    /// Get the provider name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::OpenAi => "openai",
        }
    }

    /// Parse a provider name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Some(ProviderKind::Gemini),
            "openai" => Some(ProviderKind::OpenAi),
            _ => None,
        }
    }

    /// Model used when the settings do not name one
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => gemini::DEFAULT_MODEL,
            ProviderKind::OpenAi => openai::DEFAULT_MODEL,
        }
    }

    /// Public API endpoint
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => gemini::DEFAULT_ENDPOINT,
            ProviderKind::OpenAi => openai::DEFAULT_ENDPOINT,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The one provider active in this deployment
#[derive(Debug, Clone)]
pub enum AnyProvider {
    /// Gemini backend
    Gemini(GeminiProvider),

    /// OpenAI backend
    OpenAi(OpenAiProvider),
}

impl AnyProvider {
    /// Build the provider for `kind`, optionally at a custom endpoint
    pub fn build(kind: ProviderKind, endpoint: Option<&str>) -> Result<Self, LlmError> {
        let endpoint = endpoint.unwrap_or(kind.default_endpoint());
        Ok(match kind {
            ProviderKind::Gemini => AnyProvider::Gemini(GeminiProvider::new(endpoint)?),
            ProviderKind::OpenAi => AnyProvider::OpenAi(OpenAiProvider::new(endpoint)?),
        })
    }

    /// Which backend this is
    pub fn kind(&self) -> ProviderKind {
        match self {
            AnyProvider::Gemini(_) => ProviderKind::Gemini,
            AnyProvider::OpenAi(_) => ProviderKind::OpenAi,
        }
    }
}

impl SummaryProvider for AnyProvider {
    fn name(&self) -> &'static str {
        match self {
            AnyProvider::Gemini(provider) => provider.name(),
            AnyProvider::OpenAi(provider) => provider.name(),
        }
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        match self {
            AnyProvider::Gemini(provider) => provider.generate(request).await,
            AnyProvider::OpenAi(provider) => provider.generate(request).await,
        }
    }
}
