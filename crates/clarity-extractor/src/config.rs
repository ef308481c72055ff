//! Configuration for the Extractor

use serde::{Deserialize, Serialize};

/// Default character cap for extracted page text
pub const DEFAULT_MAX_CHARS: usize = 100_000;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Soft character cap; walking stops after the node that crosses it
    pub max_chars: usize,
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chars == 0 {
            return Err("max_chars must be greater than 0".to_string());
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

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_chars, 100_000);
    }

    #[test]
    fn test_zero_cap_is_invalid() {
        let config = ExtractorConfig { max_chars: 0 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = ExtractorConfig::from_toml("").unwrap();
        assert_eq!(config, ExtractorConfig::default());

        let config = ExtractorConfig::from_toml("max_chars = 500").unwrap();
        assert_eq!(config.max_chars, 500);
    }
}
