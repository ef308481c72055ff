//! Summarization client: pacing, sending and rate-limit retries

use crate::clock::{Clock, TokioClock};
use crate::config::SummarizerConfig;
use crate::error::SummarizeError;
use crate::pacing::RequestPacer;
use crate::prompt::PromptBuilder;
use crate::retry::RetryPolicy;
use clarity_domain::{GenerationRequest, SummaryRequest};
use clarity_llm::SummaryProvider;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Turns text into a model summary through one provider
///
/// Every attempt waits at the shared [`RequestPacer`] before sending.
/// Rate-limited attempts are retried per the [`RetryPolicy`]; any other
/// failure ends the call.
pub struct SummaryClient<P, C = TokioClock> {
    provider: P,
    pacer: Arc<RequestPacer<C>>,
    retry: RetryPolicy,
    temperature: f64,
    max_prompt_chars: usize,
}

impl<P: SummaryProvider> SummaryClient<P, TokioClock> {
    /// Create a client with its own tokio-clock pacer
    pub fn new(provider: P, config: &SummarizerConfig) -> Self {
        let pacer = Arc::new(RequestPacer::with_interval(config.min_request_interval()));
        Self::with_pacer(provider, pacer, config)
    }
}

impl<P: SummaryProvider, C: Clock> SummaryClient<P, C> {
    /// Create a client that shares an existing pacer
    pub fn with_pacer(provider: P, pacer: Arc<RequestPacer<C>>, config: &SummarizerConfig) -> Self {
        Self {
            provider,
            pacer,
            retry: config.retry_policy(),
            temperature: config.temperature,
            max_prompt_chars: config.max_prompt_chars,
        }
    }

    /// Override the retry policy
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// The underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The pacer shared by this client
    pub fn pacer(&self) -> &Arc<RequestPacer<C>> {
        &self.pacer
    }

    /// The active retry policy
    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Summarize the request's text in the requested style
    ///
    /// # Errors
    ///
    /// Fails without any network call if the API key is missing
    /// ([`SummarizeError::Config`]) or the text is blank
    /// ([`SummarizeError::Input`]); otherwise see [`SummaryClient::generate`].
    pub async fn summarize(&self, request: &SummaryRequest) -> Result<String, SummarizeError> {
        if request.api_key.trim().is_empty() {
            return Err(SummarizeError::missing_api_key(self.provider.name()));
        }
        if request.text.trim().is_empty() {
            return Err(SummarizeError::Input(
                "No text provided for summarization.".to_string(),
            ));
        }

        let prompt = PromptBuilder::new(&request.text, request.style)
            .with_max_chars(self.max_prompt_chars)
            .build();

        info!(
            "Summarizing {} chars as '{}' with {} ({})",
            request.text.chars().count(),
            request.style,
            self.provider.name(),
            request.model
        );
        debug!("Prompt length: {} chars", prompt.chars().count());

        let summary = self.generate(prompt, &request.model, &request.api_key).await?;
        info!("Summary received ({} chars)", summary.chars().count());
        Ok(summary)
    }

    /// Send a ready-made prompt, pacing every attempt and retrying 429s
    ///
    /// # Errors
    ///
    /// - [`SummarizeError::RateLimit`] once the retry budget is spent
    /// - [`SummarizeError::Auth`], [`SummarizeError::Request`],
    ///   [`SummarizeError::Provider`] for other error statuses
    /// - [`SummarizeError::EmptyResponse`] / [`SummarizeError::SafetyBlocked`]
    ///   for unusable successful responses
    pub async fn generate(
        &self,
        prompt: impl Into<String>,
        model: &str,
        api_key: &str,
    ) -> Result<String, SummarizeError> {
        if api_key.trim().is_empty() {
            return Err(SummarizeError::missing_api_key(self.provider.name()));
        }

        let request = GenerationRequest::new(prompt, model, api_key)
            .with_temperature(self.temperature);
        let mut retries = 0u32;

        loop {
            self.pacer.wait_turn().await;
            debug!("Attempt {} via {}", retries + 1, self.provider.name());

            match self.provider.generate(&request).await {
                Ok(text) => return Ok(text),
                Err(error) if error.is_rate_limited() && self.retry.should_retry(retries) => {
                    let delay = self.retry.backoff(retries);
                    warn!(
                        "Rate limited by {}, retry {}/{} in {}s",
                        self.provider.name(),
                        retries + 1,
                        self.retry.max_retries,
                        delay.as_secs_f64()
                    );
                    self.pacer.clock().sleep(delay).await;
                    retries += 1;
                }
                Err(error) => {
                    warn!("{} request failed after {} retries: {}", self.provider.name(), retries, error);
                    return Err(SummarizeError::from_provider(error, self.provider.name()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualClock;
    use clarity_domain::SummaryStyle;
    use clarity_llm::{LlmError, MockProvider};
    use std::time::Duration;

    fn create_test_client(provider: MockProvider) -> (SummaryClient<MockProvider, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let config = SummarizerConfig::default();
        let pacer = Arc::new(RequestPacer::new(clock.clone(), config.min_request_interval()));
        (SummaryClient::with_pacer(provider, pacer, &config), clock)
    }

    fn request(text: &str) -> SummaryRequest {
        SummaryRequest::new(text, SummaryStyle::Short, "test-model", "test-key")
    }

    #[tokio::test]
    async fn test_missing_key_fails_fast() {
        let provider = MockProvider::default();
        let (client, _) = create_test_client(provider.clone());

        let mut req = request("Some text");
        req.api_key = "  ".to_string();
        let result = client.summarize(&req).await;

        assert!(matches!(result, Err(SummarizeError::Config(_))));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_sends_prompt_model_and_temperature() {
        let provider = MockProvider::new("ok");
        let (client, _) = create_test_client(provider.clone());

        client.summarize(&request("Body text")).await.unwrap();

        let sent = provider.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].prompt, "Provide a concise 3-5 sentence summary.\n\nText:\nBody text");
        assert_eq!(sent[0].model, "test-model");
        assert_eq!(sent[0].api_key, "test-key");
        assert_eq!(sent[0].temperature, 0.2);
    }

    #[tokio::test]
    async fn test_non_retryable_errors_stop_immediately() {
        let cases = [
            (LlmError::InvalidRequest("bad".into()), SummarizeError::Request("bad".into())),
            (LlmError::SafetyBlocked, SummarizeError::SafetyBlocked("Mock".into())),
            (
                LlmError::EmptyResponse("nothing".into()),
                SummarizeError::EmptyResponse("nothing".into()),
            ),
        ];

        for (llm_error, expected) in cases {
            let provider = MockProvider::default();
            provider.push_error(llm_error);
            let (client, clock) = create_test_client(provider.clone());

            assert_eq!(client.summarize(&request("text")).await, Err(expected));
            assert_eq!(provider.call_count(), 1);
            assert!(clock.sleeps().is_empty());
        }
    }

    #[tokio::test]
    async fn test_custom_retry_policy() {
        let provider = MockProvider::default();
        for _ in 0..2 {
            provider.push_error(LlmError::RateLimited("slow".into()));
        }
        let (client, clock) = create_test_client(provider.clone());
        let client = client.with_retry_policy(RetryPolicy::new(1, Duration::from_secs(1)));

        assert_eq!(client.summarize(&request("text")).await, Err(SummarizeError::RateLimit));
        assert_eq!(provider.call_count(), 2);
        // 1s backoff, then 1s of pacing to fill the 2s interval
        assert_eq!(clock.sleeps(), vec![Duration::from_secs(1), Duration::from_secs(1)]);
    }
}
