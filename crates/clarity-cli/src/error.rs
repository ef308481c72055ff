//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Summarization failed
    #[error("{0}")]
    Summarize(#[from] clarity_summarizer::SummarizeError),

    /// Provider could not be set up
    #[error("Provider error: {0}")]
    Provider(#[from] clarity_llm::LlmError),

    /// Settings store error
    #[error("{0}")]
    Settings(#[from] clarity_summarizer::SettingsError),

    /// Page could not be fetched
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        CliError::Fetch(e.to_string())
    }
}
