//! Configuration management for the CLI.
//!
//! One TOML file holds the user's settings (which double as the summarizer's
//! settings store), output preferences and the tuning knobs of the pipeline.

use crate::error::{CliError, Result};
use clarity_extractor::ExtractorConfig;
use clarity_summarizer::{Settings, SettingsError, SettingsStore, SummarizerConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Provider, key, style and status
    pub settings: Settings,

    /// Output preferences
    pub output: OutputSettings,

    /// Pacing, retry and prompt limits
    pub summarizer: SummarizerConfig,

    /// Extraction limits
    pub extractor: ExtractorConfig,
}

/// Output preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON format
    Json,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".clarity").join("config.toml"))
    }

    /// Load configuration from `path`, or the default when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check the pipeline limits.
    pub fn validate(&self) -> Result<()> {
        self.summarizer.validate().map_err(CliError::Config)?;
        self.extractor.validate().map_err(CliError::Config)?;
        Ok(())
    }
}

/// Settings store backed by the `[settings]` table of the config file
///
/// Saving rewrites only that table; the rest of the file is read back and
/// kept as it is.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Create a store for the config file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The config file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> std::result::Result<Settings, SettingsError> {
        Config::load_from(&self.path)
            .map(|config| config.settings)
            .map_err(|e| SettingsError::Read(e.to_string()))
    }

    fn save(&self, settings: &Settings) -> std::result::Result<(), SettingsError> {
        let mut config =
            Config::load_from(&self.path).map_err(|e| SettingsError::Read(e.to_string()))?;
        config.settings = settings.clone();
        config
            .save_to(&self.path)
            .map_err(|e| SettingsError::Write(e.to_string()))
    }
}
