//! Status command implementation.

use crate::error::Result;
use crate::output::Formatter;
use clarity_summarizer::SettingsStore;

/// Execute the status command.
pub fn execute_status<S: SettingsStore>(store: &S, formatter: &Formatter) -> Result<()> {
    let settings = store.load()?;
    println!("{}", formatter.format_status(&settings)?);
    if !settings.has_api_key() {
        println!(
            "{}",
            formatter.warning("No API key set. Run `clarity config set-key <KEY>` or set CLARITY_API_KEY.")
        );
    }
    Ok(())
}
