//! Summarize command implementation.

use crate::cli::SummarizeArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::page::load_page;
use clarity_domain::SummaryStyle;
use clarity_llm::SummaryProvider;
use clarity_summarizer::{Clock, PageSummarizer, SettingsStore};

/// Execute the summarize command.
pub async fn execute_summarize<P, S, C>(
    args: SummarizeArgs,
    service: &PageSummarizer<P, S, C>,
    formatter: &Formatter,
) -> Result<()>
where
    P: SummaryProvider,
    S: SettingsStore,
    C: Clock,
{
    let page = load_page(&args.page, args.selection).await?;
    let summary = summarize(&page, args.style.as_deref(), service).await?;

    let settings = service.store().load()?;
    let style = args
        .style
        .as_deref()
        .map(SummaryStyle::from_name)
        .unwrap_or(settings.summary_style);

    if let Some(title) = page.title() {
        eprintln!("{}", formatter.info(&title));
    }
    println!("{}", formatter.format_summary(&summary, style, settings.model())?);
    Ok(())
}

/// Summarize an already loaded page, applying an optional style name.
pub async fn summarize<T, P, S, C>(
    page: &T,
    style: Option<&str>,
    service: &PageSummarizer<P, S, C>,
) -> Result<String>
where
    T: clarity_domain::TextSource + ?Sized,
    P: SummaryProvider,
    S: SettingsStore,
    C: Clock,
{
    let style = style.map(SummaryStyle::from_name);
    Ok(service.summarize_page(page, style).await?)
}
