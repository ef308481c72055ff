//! User settings and the store they live in

use clarity_domain::{SummaryOutcome, SummaryStyle};
use clarity_llm::ProviderKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

/// Settings read before every summarization run
///
/// `provider`, `model`, `api_key` and `summary_style` are written by the user;
/// `is_summarizing` and `last_outcome` are status fields written by
/// [`PageSummarizer`](crate::PageSummarizer).
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Active provider
    pub provider: ProviderKind,

    /// Model name; the provider default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Provider API key
    pub api_key: String,

    /// Custom provider endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Default summary style
    pub summary_style: SummaryStyle,

    /// Whether a summarization run is in progress
    pub is_summarizing: bool,

    /// Result of the most recent run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_outcome: Option<SummaryOutcome>,
}

impl Settings {
    /// Model to use, falling back to the provider default
    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .map(str::trim)
            .filter(|model| !model.is_empty())
            .unwrap_or(self.provider.default_model())
    }

    /// Whether an API key has been set
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &if self.has_api_key() { "<set>" } else { "<unset>" })
            .field("endpoint", &self.endpoint)
            .field("summary_style", &self.summary_style)
            .field("is_summarizing", &self.is_summarizing)
            .field("last_outcome", &self.last_outcome)
            .finish()
    }
}

/// Errors from a settings store
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Settings could not be read or parsed
    #[error("Failed to read settings: {0}")]
    Read(String),

    /// Settings could not be written
    #[error("Failed to write settings: {0}")]
    Write(String),
}

/// Key-value persistence for [`Settings`]
pub trait SettingsStore: Send + Sync {
    /// Load the current settings
    fn load(&self) -> Result<Settings, SettingsError>;

    /// Replace the stored settings
    fn save(&self, settings: &Settings) -> Result<(), SettingsError>;

    /// Load, modify and save in one step
    fn update<F>(&self, f: F) -> Result<Settings, SettingsError>
    where
        F: FnOnce(&mut Settings),
        Self: Sized,
    {
        let mut settings = self.load()?;
        f(&mut settings);
        self.save(&settings)?;
        Ok(settings)
    }
}

/// In-process settings store; clones share the same settings
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    settings: Arc<Mutex<Settings>>,
}

impl MemorySettingsStore {
    /// Create a store holding `settings`
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(Mutex::new(settings)),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Settings, SettingsError> {
        Ok(self.settings.lock().unwrap_or_else(PoisonError::into_inner).clone())
    }

    fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        *self.settings.lock().unwrap_or_else(PoisonError::into_inner) = settings.clone();
        Ok(())
    }
}
