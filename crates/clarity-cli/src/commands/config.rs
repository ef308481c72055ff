//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{Config, FileSettingsStore};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use clarity_domain::SummaryStyle;
use clarity_llm::ProviderKind;
use clarity_summarizer::{Settings, SettingsStore};

const KNOWN_STYLES: [SummaryStyle; 3] = [
    SummaryStyle::Short,
    SummaryStyle::Bullets,
    SummaryStyle::Detailed,
];

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    store: &FileSettingsStore,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(store),
        ConfigAction::Path => {
            println!("{}", store.path().display());
            Ok(())
        }
        action => {
            let message = apply(action, store)?;
            println!("{}", formatter.success(&message));
            Ok(())
        }
    }
}

/// Apply a settings change and describe it.
pub fn apply<S: SettingsStore>(action: ConfigAction, store: &S) -> Result<String> {
    match action {
        ConfigAction::SetProvider { provider, endpoint } => {
            let kind = ProviderKind::parse(&provider).ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "Unknown provider '{}'. Expected gemini or openai",
                    provider
                ))
            })?;
            let settings = store.update(|s| {
                if s.provider != kind {
                    s.model = None;
                }
                s.provider = kind;
                s.endpoint = endpoint;
            })?;
            Ok(format!(
                "Provider set to {} (model: {})",
                settings.provider,
                settings.model()
            ))
        }
        ConfigAction::SetModel { model } => {
            let model = model.trim().to_string();
            if model.is_empty() {
                return Err(CliError::InvalidInput("Model name cannot be empty".into()));
            }
            store.update(|s| s.model = Some(model.clone()))?;
            Ok(format!("Model set to {}", model))
        }
        ConfigAction::SetKey { key } => {
            let key = key.trim().to_string();
            if key.is_empty() {
                return Err(CliError::InvalidInput("API key cannot be empty".into()));
            }
            store.update(|s| s.api_key = key)?;
            Ok("API key saved".to_string())
        }
        ConfigAction::ClearKey => {
            store.update(|s| s.api_key.clear())?;
            Ok("API key removed".to_string())
        }
        ConfigAction::SetStyle { style } => {
            let parsed = SummaryStyle::from_name(&style);
            if !KNOWN_STYLES.contains(&parsed) {
                return Err(CliError::InvalidInput(format!(
                    "Unknown style '{}'. Expected short, bullets or detailed",
                    style
                )));
            }
            store.update(|s| s.summary_style = parsed)?;
            Ok(format!("Summary style set to {}", parsed))
        }
        ConfigAction::Show | ConfigAction::Path => Err(CliError::InvalidInput(
            "Not a settings change".into(),
        )),
    }
}

fn show_config(store: &FileSettingsStore) -> Result<()> {
    let mut config = Config::load_from(store.path())?;
    config.settings = masked(config.settings);
    let contents = toml::to_string_pretty(&config)
        .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
    println!("# {}", store.path().display());
    print!("{}", contents);
    Ok(())
}

fn masked(mut settings: Settings) -> Settings {
    if settings.has_api_key() {
        settings.api_key = "********".to_string();
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use clarity_summarizer::MemorySettingsStore;

    #[test]
    fn test_set_provider_resets_model() {
        let store = MemorySettingsStore::default();
        apply(
            ConfigAction::SetModel {
                model: "gemini-1.5-pro".to_string(),
            },
            &store,
        )
        .unwrap();

        let message = apply(
            ConfigAction::SetProvider {
                provider: "OpenAI".to_string(),
                endpoint: None,
            },
            &store,
        )
        .unwrap();

        assert_eq!(message, "Provider set to openai (model: gpt-4o-mini)");
        let settings = store.load().unwrap();
        assert_eq!(settings.provider, ProviderKind::OpenAi);
        assert_eq!(settings.model, None);
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let store = MemorySettingsStore::default();
        let result = apply(
            ConfigAction::SetProvider {
                provider: "claude".to_string(),
                endpoint: None,
            },
            &store,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_set_and_clear_key() {
        let store = MemorySettingsStore::default();
        apply(ConfigAction::SetKey { key: "  abc  ".to_string() }, &store).unwrap();
        assert_eq!(store.load().unwrap().api_key, "abc");

        apply(ConfigAction::ClearKey, &store).unwrap();
        assert!(!store.load().unwrap().has_api_key());

        let empty = apply(ConfigAction::SetKey { key: " ".to_string() }, &store);
        assert!(matches!(empty, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_set_style_only_accepts_known_styles() {
        let store = MemorySettingsStore::default();
        apply(ConfigAction::SetStyle { style: "Bullets".to_string() }, &store).unwrap();
        assert_eq!(store.load().unwrap().summary_style, SummaryStyle::Bullets);

        let result = apply(ConfigAction::SetStyle { style: "haiku".to_string() }, &store);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert_eq!(store.load().unwrap().summary_style, SummaryStyle::Bullets);
    }

    #[test]
    fn test_masked_hides_key() {
        let settings = Settings {
            api_key: "secret".to_string(),
            ..Settings::default()
        };
        assert_eq!(masked(settings).api_key, "********");
        assert_eq!(masked(Settings::default()).api_key, "");
    }
}
