//! OpenAI Provider Implementation
//!
//! Talks to the chat completions API with bearer-token auth:
//! `POST {endpoint}/chat/completions`.

use crate::{endpoint_url, read_error_details, LlmError, SummaryProvider};
use clarity_domain::GenerationRequest;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default OpenAI API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";

/// Default model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default HTTP timeout for a single call (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const SYSTEM_MESSAGE: &str = "You summarize text concisely and clearly.";

/// Finish reason OpenAI reports when output was filtered
const CONTENT_FILTER_FINISH_REASON: &str = "content_filter";

/// OpenAI chat completions provider
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    finish_reason: Option<String>,
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiProvider {
    /// Create a provider for the given API endpoint
    pub fn new(endpoint: impl Into<String>) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Create a provider for the public OpenAI endpoint
    pub fn default_endpoint() -> Result<Self, LlmError> {
        Self::new(DEFAULT_ENDPOINT)
    }

    /// The configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SummaryProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "OpenAI"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        let url = endpoint_url(&self.endpoint, &["chat", "completions"])?;
        let body = ChatRequest {
            model: &request.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_MESSAGE,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            temperature: request.temperature,
        };

        debug!(model = %request.model, prompt_len = request.prompt.len(), "Sending OpenAI request");

        let response = self
            .client
            .post(url)
            .bearer_auth(&request.api_key)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let details = read_error_details(response).await;
            debug!(status = status.as_u16(), "OpenAI returned an error status");
            return Err(LlmError::from_status(status.as_u16(), details));
        }

        let parsed: ChatResponse = response.json().await?;
        extract_text(parsed)
    }
}

fn extract_text(response: ChatResponse) -> Result<String, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::EmptyResponse("No choices returned by OpenAI.".to_string()))?;

    if choice.finish_reason.as_deref() == Some(CONTENT_FILTER_FINISH_REASON) {
        return Err(LlmError::SafetyBlocked);
    }

    let text = choice
        .message
        .and_then(|message| message.content)
        .unwrap_or_default();
    let text = text.trim();

    if text.is_empty() {
        return Err(LlmError::EmptyResponse(
            "No summary text returned by OpenAI.".to_string(),
        ));
    }
    Ok(text.to_string())
}
