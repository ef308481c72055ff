//! Test-API command implementation.

use crate::error::Result;
use crate::output::Formatter;
use clarity_llm::SummaryProvider;
use clarity_summarizer::{Clock, PageSummarizer, SettingsStore};

/// Execute the test-api command.
pub async fn execute_test_api<P, S, C>(
    service: &PageSummarizer<P, S, C>,
    formatter: &Formatter,
) -> Result<()>
where
    P: SummaryProvider,
    S: SettingsStore,
    C: Clock,
{
    let response = service.test_connection().await?;
    println!("{}", formatter.success("API connection successful"));
    println!("{}", formatter.info(&format!("Response: {}", response)));
    Ok(())
}
