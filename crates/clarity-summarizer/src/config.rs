//! Configuration for the Summarizer

use crate::retry::RetryPolicy;
use clarity_domain::DEFAULT_TEMPERATURE;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the summarization pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Minimum time between two sends (milliseconds)
    pub min_request_interval_ms: u64,

    /// Retries allowed after a rate-limited response
    pub max_retries: u32,

    /// Backoff before the first retry (seconds); doubles on each retry
    pub initial_backoff_secs: u64,

    /// Page text beyond this many characters is cut from the prompt
    pub max_prompt_chars: usize,

    /// Sampling temperature
    pub temperature: f64,

    /// Caller deadline for a whole summarization run (seconds)
    pub request_timeout_secs: u64,

    /// Caller deadline for a connection test (seconds)
    pub test_timeout_secs: u64,
}

impl SummarizerConfig {
    /// Minimum interval between sends
    pub fn min_request_interval(&self) -> Duration {
        Duration::from_millis(self.min_request_interval_ms)
    }

    /// Deadline for a summarization run
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Deadline for a connection test
    pub fn test_timeout(&self) -> Duration {
        Duration::from_secs(self.test_timeout_secs)
    }

    /// Retry policy for rate-limited responses
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, Duration::from_secs(self.initial_backoff_secs))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_prompt_chars == 0 {
            return Err("max_prompt_chars must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err("temperature must be between 0.0 and 2.0".to_string());
        }
        if self.max_retries > 0 && self.initial_backoff_secs == 0 {
            return Err("initial_backoff_secs must be greater than 0 when retries are enabled".to_string());
        }
        if self.request_timeout_secs == 0 || self.test_timeout_secs == 0 {
            return Err("timeouts must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            min_request_interval_ms: 2_000,
            max_retries: 3,
            initial_backoff_secs: 2,
            max_prompt_chars: crate::prompt::MAX_PROMPT_CHARS,
            temperature: DEFAULT_TEMPERATURE,
            request_timeout_secs: 30,
            test_timeout_secs: 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SummarizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_request_interval(), Duration::from_millis(2000));
        assert_eq!(config.retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn test_invalid_temperature() {
        let config = SummarizerConfig {
            temperature: 3.5,
            ..SummarizerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_backoff_requires_no_retries() {
        let mut config = SummarizerConfig {
            initial_backoff_secs: 0,
            ..SummarizerConfig::default()
        };
        assert!(config.validate().is_err());

        config.max_retries = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SummarizerConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = SummarizerConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml() {
        let config = SummarizerConfig::from_toml("max_retries = 5").unwrap();
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.min_request_interval_ms, 2_000);
    }
}
