//! Summary styles

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of the summary requested from the model
///
/// Unknown style names never fail to parse; they map to [`SummaryStyle::Generic`],
/// which asks for a plain concise summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SummaryStyle {
    /// A 3-5 sentence summary
    #[default]
    Short,

    /// 5-8 bullet points of key takeaways
    Bullets,

    /// A detailed summary of arguments and conclusions
    Detailed,

    /// Fallback for unrecognized style names
    Generic,
}

impl SummaryStyle {
    /// Get the style name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryStyle::Short => "short",
            SummaryStyle::Bullets => "bullets",
            SummaryStyle::Detailed => "detailed",
            SummaryStyle::Generic => "generic",
        }
    }

    /// Parse a style name, falling back to `Generic` for anything unknown
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "short" => SummaryStyle::Short,
            "bullets" => SummaryStyle::Bullets,
            "detailed" => SummaryStyle::Detailed,
            _ => SummaryStyle::Generic,
        }
    }

    /// Instruction prepended to the page text for this style
    pub fn instruction(&self) -> &'static str {
        match self {
            SummaryStyle::Short => "Provide a concise 3-5 sentence summary.",
            SummaryStyle::Bullets => "Provide 5-8 bullet points of key takeaways.",
            SummaryStyle::Detailed => {
                "Provide a detailed summary focusing on key arguments and conclusions."
            }
            SummaryStyle::Generic => "Provide a concise summary.",
        }
    }
}

impl fmt::Display for SummaryStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SummaryStyle {
    fn from(name: String) -> Self {
        SummaryStyle::from_name(&name)
    }
}

impl From<SummaryStyle> for String {
    fn from(style: SummaryStyle) -> Self {
        style.as_str().to_string()
    }
}
