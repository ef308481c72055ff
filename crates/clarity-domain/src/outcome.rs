//! Outcome of the most recent summarization run

use serde::{Deserialize, Serialize};

/// The last summary or the last failure message
///
/// Successes and failures are tagged so a status view never has to guess
/// whether the stored text is a summary or an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum SummaryOutcome {
    /// A summary returned by the model
    Summary(String),

    /// A human-readable failure message
    Failure(String),
}

impl SummaryOutcome {
    /// Whether this outcome is a successful summary
    pub fn is_success(&self) -> bool {
        matches!(self, SummaryOutcome::Summary(_))
    }

    /// The stored text, summary or error alike
    pub fn text(&self) -> &str {
        match self {
            SummaryOutcome::Summary(text) | SummaryOutcome::Failure(text) => text,
        }
    }
}

impl<E: std::fmt::Display> From<&Result<String, E>> for SummaryOutcome {
    fn from(result: &Result<String, E>) -> Self {
        match result {
            Ok(summary) => SummaryOutcome::Summary(summary.clone()),
            Err(e) => SummaryOutcome::Failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: Result<String, String> = Ok("A summary.".to_string());
        let outcome = SummaryOutcome::from(&ok);
        assert!(outcome.is_success());
        assert_eq!(outcome.text(), "A summary.");

        let err: Result<String, String> = Err("Rate limit exceeded".to_string());
        let outcome = SummaryOutcome::from(&err);
        assert!(!outcome.is_success());
        assert_eq!(outcome.text(), "Rate limit exceeded");
    }

    #[test]
    fn test_tagged_serialization() {
        let outcome = SummaryOutcome::Failure("boom".to_string());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "failure");
        assert_eq!(json["text"], "boom");
    }
}
