//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use clarity_domain::{SummaryOutcome, SummaryStyle};
use clarity_summarizer::Settings;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a finished summary.
    pub fn format_summary(&self, summary: &str, style: SummaryStyle, model: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "summary": summary,
                "style": style.as_str(),
                "model": model,
            }))?),
            OutputFormat::Text => Ok(summary.to_string()),
        }
    }

    /// Format extracted page text.
    pub fn format_extracted(&self, text: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "text": text,
                "chars": text.chars().count(),
            }))?),
            OutputFormat::Text if text.is_empty() => Ok(self.warning("No text found on this page.")),
            OutputFormat::Text => Ok(text.to_string()),
        }
    }

    /// Format settings and the last outcome. The API key is never shown.
    pub fn format_status(&self, settings: &Settings) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_status_json(settings),
            OutputFormat::Text => Ok(self.format_status_table(settings)),
        }
    }

    fn format_status_json(&self, settings: &Settings) -> Result<String> {
        Ok(serde_json::to_string_pretty(&serde_json::json!({
            "provider": settings.provider.as_str(),
            "model": settings.model(),
            "endpoint": settings.endpoint,
            "api_key_set": settings.has_api_key(),
            "summary_style": settings.summary_style.as_str(),
            "is_summarizing": settings.is_summarizing,
            "last_outcome": settings.last_outcome,
        }))?)
    }

    fn format_status_table(&self, settings: &Settings) -> String {
        let key_state = if settings.has_api_key() { "set" } else { "not set" };
        let endpoint = settings
            .endpoint
            .clone()
            .unwrap_or_else(|| settings.provider.default_endpoint().to_string());
        let last = match &settings.last_outcome {
            Some(SummaryOutcome::Summary(text)) => format!("summary: {}", preview(text, 60)),
            Some(SummaryOutcome::Failure(text)) => format!("error: {}", text),
            None => "none".to_string(),
        };

        let mut builder = Builder::default();
        builder.push_record(["Setting", "Value"]);
        builder.push_record(["Provider", settings.provider.as_str()]);
        builder.push_record(["Model", settings.model()]);
        builder.push_record(["Endpoint", &endpoint]);
        builder.push_record(["API key", key_state]);
        builder.push_record(["Summary style", settings.summary_style.as_str()]);
        builder.push_record(["Summarizing", if settings.is_summarizing { "yes" } else { "no" }]);
        builder.push_record(["Last outcome", &last]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// First `max` chars of `text`, with an ellipsis when cut.
fn preview(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match flat.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &flat[..idx]),
        None => flat,
    }
}
