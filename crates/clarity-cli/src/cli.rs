//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};

/// Clarity - Summarize web pages with a generative-language API.
#[derive(Debug, Parser)]
#[command(name = "clarity")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// API key to use instead of the stored one
    #[arg(long, env = "CLARITY_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize a page
    Summarize(SummarizeArgs),

    /// Print the text that would be extracted from a page
    Extract(PageArgs),

    /// Check that the configured key and model work
    TestApi,

    /// Show settings and the last summarization outcome
    Status,

    /// Manage settings
    Config(ConfigArgs),
}

impl Command {
    /// Whether the command runs the extraction or summarization pipeline
    ///
    /// Only these need valid limits; `config` and `status` must still work
    /// on a broken file so it can be inspected and fixed.
    pub fn needs_valid_config(&self) -> bool {
        matches!(
            self,
            Command::Summarize(_) | Command::Extract(_) | Command::TestApi
        )
    }
}

/// Where to read a page from.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PageArgs {
    /// HTML or text file (reads stdin when neither a file nor --url is given)
    pub path: Option<String>,

    /// Fetch the page from a URL
    #[arg(short, long, conflicts_with = "path")]
    pub url: Option<String>,

    /// Treat the input as plain text, not HTML
    #[arg(long)]
    pub plain: bool,
}

/// Arguments for the summarize command.
#[derive(Debug, clap::Args)]
pub struct SummarizeArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Summary style: short, bullets or detailed (overrides the saved style)
    #[arg(short, long)]
    pub style: Option<String>,

    /// Summarize this selected text instead of the whole page
    #[arg(long)]
    pub selection: Option<String>,
}

/// Arguments for settings management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Settings management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show current settings
    Show,

    /// Print the configuration file path
    Path,

    /// Select the provider
    SetProvider {
        /// Provider name (gemini or openai)
        provider: String,
        /// Custom API endpoint
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Set the model name
    SetModel {
        /// Model name (e.g. gemini-1.5-flash)
        model: String,
    },

    /// Set the API key
    SetKey {
        /// API key
        key: String,
    },

    /// Remove the stored API key
    ClearKey,

    /// Set the default summary style
    SetStyle {
        /// Style name (short, bullets or detailed)
        style: String,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}
