//! Page-level summarization service

use crate::client::SummaryClient;
use crate::clock::{Clock, TokioClock};
use crate::config::SummarizerConfig;
use crate::error::SummarizeError;
use crate::prompt::CONNECTION_TEST_PROMPT;
use crate::settings::{Settings, SettingsStore};
use clarity_domain::{SummaryOutcome, SummaryRequest, SummaryStyle, TextSource};
use clarity_extractor::TextExtractor;
use clarity_llm::SummaryProvider;
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

/// Extracts a page, summarizes it and reports status through the settings store
///
/// This is the trigger surface: `summarize_page(page, style)` returns the
/// summary or a classified error, bounded by a caller-side deadline. Dropping
/// the returned future cancels any pending sleep or request.
pub struct PageSummarizer<P, S, C = TokioClock> {
    client: SummaryClient<P, C>,
    store: S,
    extractor: TextExtractor,
    deadline: Duration,
    test_deadline: Duration,
    api_key_override: Option<String>,
}

impl<P, S, C> PageSummarizer<P, S, C>
where
    P: SummaryProvider,
    S: SettingsStore,
    C: Clock,
{
    /// Create a new service
    pub fn new(
        client: SummaryClient<P, C>,
        store: S,
        extractor: TextExtractor,
        config: &SummarizerConfig,
    ) -> Self {
        Self {
            client,
            store,
            extractor,
            deadline: config.request_timeout(),
            test_deadline: config.test_timeout(),
            api_key_override: None,
        }
    }

    /// Use this key instead of the stored one (e.g. from the environment)
    pub fn with_api_key_override(mut self, api_key: Option<String>) -> Self {
        self.api_key_override = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    /// Override the summarization deadline
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// The settings store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The summarization client
    pub fn client(&self) -> &SummaryClient<P, C> {
        &self.client
    }

    /// Text that would be summarized for `page` (selection first)
    pub fn extract<T: TextSource + ?Sized>(&self, page: &T) -> String {
        self.extractor.extract(page)
    }

    /// The page's document text, ignoring any selection
    pub fn extract_document<T: TextSource + ?Sized>(&self, page: &T) -> String {
        self.extractor.extract_document(page)
    }

    /// Extract and summarize a page
    ///
    /// `style` overrides the stored default style for this run only.
    pub async fn summarize_page<T: TextSource + ?Sized>(
        &self,
        page: &T,
        style: Option<SummaryStyle>,
    ) -> Result<String, SummarizeError> {
        let text = self.extractor.extract(page);
        if text.is_empty() {
            warn!("No text found on page");
            let result: Result<String, SummarizeError> = Err(SummarizeError::Input(
                "No text found on this page to summarize.".to_string(),
            ));
            let outcome = SummaryOutcome::from(&result);
            self.write_status(move |s| {
                s.is_summarizing = false;
                s.last_outcome = Some(outcome);
            });
            return result;
        }
        info!("Extracted {} chars from page", text.chars().count());
        self.summarize_text(&text, style).await
    }

    /// Summarize already-extracted text, recording status as it goes
    ///
    /// Sets `is_summarizing` before the request; on every exit path clears it
    /// and stores the outcome (summary or failure message) in `last_outcome`.
    pub async fn summarize_text(
        &self,
        text: &str,
        style: Option<SummaryStyle>,
    ) -> Result<String, SummarizeError> {
        let settings = self.load_settings()?;
        let style = style.unwrap_or(settings.summary_style);
        let request = SummaryRequest::new(text, style, settings.model(), self.api_key(&settings));

        self.write_status(|s| s.is_summarizing = true);

        let result = self
            .with_deadline_of(self.deadline, self.client.summarize(&request))
            .await;

        let outcome = SummaryOutcome::from(&result);
        self.write_status(move |s| {
            s.is_summarizing = false;
            s.last_outcome = Some(outcome);
        });

        result
    }

    /// Check that the configured key and model work
    ///
    /// Goes through the same pacing and retry path as a summary, with its own
    /// shorter deadline. Status fields are left untouched.
    pub async fn test_connection(&self) -> Result<String, SummarizeError> {
        let settings = self.load_settings()?;
        let api_key = self.api_key(&settings);
        info!("Testing {} connection with model {}", self.client.provider().name(), settings.model());

        self.with_deadline_of(
            self.test_deadline,
            self.client.generate(CONNECTION_TEST_PROMPT, settings.model(), &api_key),
        )
        .await
    }

    fn load_settings(&self) -> Result<Settings, SummarizeError> {
        self.store
            .load()
            .map_err(|e| SummarizeError::Config(e.to_string()))
    }

    fn api_key(&self, settings: &Settings) -> String {
        self.api_key_override
            .clone()
            .unwrap_or_else(|| settings.api_key.clone())
    }

    async fn with_deadline_of<F>(&self, deadline: Duration, call: F) -> Result<String, SummarizeError>
    where
        F: Future<Output = Result<String, SummarizeError>>,
    {
        match timeout(deadline, call).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Request timed out after {:?}", deadline);
                Err(SummarizeError::Timeout(deadline))
            }
        }
    }

    fn write_status(&self, f: impl FnOnce(&mut Settings)) {
        if let Err(e) = self.store.update(f) {
            warn!("Failed to record summarization status: {}", e);
        }
    }
}
