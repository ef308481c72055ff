//! Prompt construction for summaries

use clarity_domain::SummaryStyle;

/// Page text beyond this many characters is dropped from the prompt
pub const MAX_PROMPT_CHARS: usize = 12_000;

/// Prompt used to check that the key and model work
pub const CONNECTION_TEST_PROMPT: &str =
    "Please respond with 'API test successful' if you can see this message.";

/// Return at most the first `max_chars` characters of `text`
///
/// A hard cut that respects UTF-8 boundaries but not words or sentences.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Build the prompt for `text` in `style` with the default truncation
pub fn build_prompt(text: &str, style: SummaryStyle) -> String {
    PromptBuilder::new(text, style).build()
}

/// Builds summary prompts
pub struct PromptBuilder<'a> {
    text: &'a str,
    style: SummaryStyle,
    max_chars: usize,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(text: &'a str, style: SummaryStyle) -> Self {
        Self {
            text,
            style,
            max_chars: MAX_PROMPT_CHARS,
        }
    }

    /// Override the truncation limit
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Build `<instruction>\n\nText:\n<truncated text>`
    pub fn build(&self) -> String {
        format!(
            "{}\n\nText:\n{}",
            self.style.instruction(),
            truncate_chars(self.text, self.max_chars)
        )
    }
}
