//! Clarity CLI - Summarize web pages from the command line.

use clap::Parser;
use clarity_cli::commands;
use clarity_cli::config::OutputFormat;
use clarity_cli::{build_service, Cli, Command, Config, FileSettingsStore, Formatter};
use clarity_extractor::TextExtractor;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let error_formatter = Formatter::new(OutputFormat::Text, !cli.no_color);

    if let Err(e) = run(cli).await {
        eprintln!("{}", error_formatter.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> clarity_cli::Result<()> {
    let path = match &cli.config {
        Some(path) => PathBuf::from(path),
        None => Config::default_path()?,
    };
    let config = Config::load_from(&path)?;
    if cli.command.needs_valid_config() {
        config.validate()?;
    }

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.output.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.output.color;

    let formatter = Formatter::new(format, color_enabled);
    let store = FileSettingsStore::new(&path);

    match cli.command {
        Command::Config(args) => commands::execute_config(args, &store, &formatter)?,
        Command::Status => commands::execute_status(&store, &formatter)?,
        Command::Extract(args) => {
            let extractor = TextExtractor::new(config.extractor.clone());
            commands::execute_extract(args, &extractor, &formatter).await?;
        }
        Command::Summarize(args) => {
            let service = build_service(&config, store, cli.api_key)?;
            commands::execute_summarize(args, &service, &formatter).await?;
        }
        Command::TestApi => {
            let service = build_service(&config, store, cli.api_key)?;
            commands::execute_test_api(&service, &formatter).await?;
        }
    }

    Ok(())
}
