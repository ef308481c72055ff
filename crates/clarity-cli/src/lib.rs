//! Clarity CLI library.
//!
//! Command-line front end for page summarization: argument parsing, the TOML
//! configuration file that doubles as the settings store, page loading and
//! output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod page;

pub use cli::{Cli, Command};
pub use config::{Config, FileSettingsStore};
pub use error::{CliError, Result};
pub use output::Formatter;

use clarity_extractor::TextExtractor;
use clarity_llm::AnyProvider;
use clarity_summarizer::{PageSummarizer, SummaryClient};

/// The summarizer service as the binary runs it
pub type Service = PageSummarizer<AnyProvider, FileSettingsStore>;

/// Build the service for the provider selected in `config`
///
/// The provider is fixed for the lifetime of the service; model and key are
/// re-read from the store on every call.
pub fn build_service(
    config: &Config,
    store: FileSettingsStore,
    api_key_override: Option<String>,
) -> Result<Service> {
    let settings = &config.settings;
    let provider = AnyProvider::build(settings.provider, settings.endpoint.as_deref())?;
    let client = SummaryClient::new(provider, &config.summarizer);
    let extractor = TextExtractor::new(config.extractor.clone());

    Ok(PageSummarizer::new(client, store, extractor, &config.summarizer)
        .with_api_key_override(api_key_override))
}
