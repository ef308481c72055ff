//! Extract command implementation.

use crate::cli::PageArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::page::load_page;
use clarity_extractor::TextExtractor;

/// Execute the extract command.
///
/// Prints the document text the summarizer would see, ignoring any selection.
pub async fn execute_extract(
    args: PageArgs,
    extractor: &TextExtractor,
    formatter: &Formatter,
) -> Result<()> {
    let page = load_page(&args, None).await?;
    let text = extractor.extract_document(&page);
    println!("{}", formatter.format_extracted(&text)?);
    Ok(())
}
