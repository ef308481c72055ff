//! Scripted provider for tests

use crate::{LlmError, SummaryProvider};
use clarity_domain::GenerationRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Mock provider that replays scripted results without network calls
///
/// Scripted results are returned in order; once they run out every call gets
/// the default response. Clones share the script and the call log.
///
/// # Examples
///
/// ```
/// use clarity_domain::GenerationRequest;
/// use clarity_llm::{LlmError, MockProvider, SummaryProvider};
///
/// # async fn example() {
/// let provider = MockProvider::new("fallback");
/// provider.push_error(LlmError::RateLimited("slow down".into()));
/// provider.push_response("scripted");
///
/// let request = GenerationRequest::new("prompt", "model", "key");
/// assert!(provider.generate(&request).await.is_err());
/// assert_eq!(provider.generate(&request).await.unwrap(), "scripted");
/// assert_eq!(provider.generate(&request).await.unwrap(), "fallback");
/// assert_eq!(provider.call_count(), 3);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    script: Arc<Mutex<VecDeque<Result<String, LlmError>>>>,
    requests: Arc<Mutex<Vec<GenerationRequest>>>,
}

impl MockProvider {
    /// Create a mock that answers every prompt with `response`
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful answer
    pub fn push_response(&self, response: impl Into<String>) {
        lock(&self.script).push_back(Ok(response.into()));
    }

    /// Queue a failure
    pub fn push_error(&self, error: LlmError) {
        lock(&self.script).push_back(Err(error));
    }

    /// Number of generate calls so far
    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Every request received, in order
    pub fn requests(&self) -> Vec<GenerationRequest> {
        lock(&self.requests).clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl SummaryProvider for MockProvider {
    fn name(&self) -> &'static str {
        "Mock"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        lock(&self.requests).push(request.clone());
        let scripted = lock(&self.script).pop_front();
        scripted.unwrap_or_else(|| Ok(self.default_response.clone()))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
