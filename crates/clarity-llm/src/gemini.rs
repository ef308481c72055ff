//! Gemini Provider Implementation
//!
//! Talks to the Google Generative Language API:
//! `POST {endpoint}/models/{model}:generateContent?key={api_key}`.
//!
//! # Examples
//!
//! ```no_run
//! use clarity_domain::GenerationRequest;
//! use clarity_llm::{GeminiProvider, SummaryProvider};
//!
//! # async fn example() -> Result<(), clarity_llm::LlmError> {
//! let provider = GeminiProvider::default_endpoint()?;
//! let request = GenerationRequest::new("Summarize: ...", "gemini-1.5-flash", "my-key");
//! let summary = provider.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

use crate::{endpoint_url, read_error_details, LlmError, SummaryProvider};
use clarity_domain::GenerationRequest;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Generative Language API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default HTTP timeout for a single call (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const SYSTEM_PREAMBLE: &str = "You are a helpful assistant that summarizes web pages succinctly.";

/// Finish reason Gemini reports when a candidate was filtered
const SAFETY_FINISH_REASON: &str = "SAFETY";

/// Gemini `generateContent` provider
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    finish_reason: Option<String>,
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiProvider {
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

    /// Create a provider for the public Gemini endpoint
    pub fn default_endpoint() -> Result<Self, LlmError> {
        Self::new(DEFAULT_ENDPOINT)
    }

    /// The configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, request: &GenerationRequest) -> Result<reqwest::Url, LlmError> {
        let action = format!("{}:generateContent", request.model);
        let mut url = endpoint_url(&self.endpoint, &["models", &action])?;
        url.query_pairs_mut().append_pair("key", &request.api_key);
        Ok(url)
    }
}

impl SummaryProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        let url = self.url(request)?;
        let text = format!("{}\n\n{}", SYSTEM_PREAMBLE, request.prompt);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: &text }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        };

        debug!(model = %request.model, prompt_len = request.prompt.len(), "Sending Gemini request");

        let response = self.client.post(url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let details = read_error_details(response).await;
            debug!(status = status.as_u16(), "Gemini returned an error status");
            return Err(LlmError::from_status(status.as_u16(), details));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        extract_text(parsed)
    }
}

fn extract_text(response: GenerateContentResponse) -> Result<String, LlmError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::EmptyResponse("No response from Gemini API.".to_string()))?;

    if candidate.finish_reason.as_deref() == Some(SAFETY_FINISH_REASON) {
        return Err(LlmError::SafetyBlocked);
    }

    let text: String = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();
    let text = text.trim();

    if text.is_empty() {
        return Err(LlmError::EmptyResponse(
            "No summary text returned by Gemini.".to_string(),
        ));
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn parse(value: serde_json::Value) -> Result<String, LlmError> {
        extract_text(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_extract_joins_parts_and_trims() {
        let result = parse(json!({
            "candidates": [{"content": {"parts": [{"text": " A brief "}, {"text": "summary. "}]}}]
        }));
        assert_eq!(result.unwrap(), "A brief summary.");
    }

    #[test]
    fn test_extract_no_candidates() {
        assert!(matches!(parse(json!({})), Err(LlmError::EmptyResponse(_))));
        assert!(matches!(parse(json!({"candidates": []})), Err(LlmError::EmptyResponse(_))));
    }

    #[test]
    fn test_extract_safety_block() {
        let result = parse(json!({"candidates": [{"finishReason": "SAFETY"}]}));
        assert_eq!(result, Err(LlmError::SafetyBlocked));
    }

    #[test]
    fn test_extract_blank_text() {
        let result = parse(json!({
            "candidates": [{"finishReason": "STOP", "content": {"parts": [{"text": "  \n"}]}}]
        }));
        assert!(matches!(result, Err(LlmError::EmptyResponse(_))));
    }

    #[test]
    fn test_url_encodes_key() {
        let provider = GeminiProvider::new("https://example.com/v1beta").unwrap();
        let request = GenerationRequest::new("p", "gemini-1.5-flash", "a&b");
        let url = provider.url(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/v1beta/models/gemini-1.5-flash:generateContent?key=a%26b"
        );
    }

    #[tokio::test]
    async fn test_generate_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-1.5-flash:generateContent"))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(json!({"generationConfig": {"temperature": 0.2}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "A brief summary."}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = GeminiProvider::new(server.uri()).unwrap();
        let request = GenerationRequest::new("Summarize", "gemini-1.5-flash", "test-key");
        let result = provider.generate(&request).await;
        assert_eq!(result.unwrap(), "A brief summary.");
    }

    #[tokio::test]
    async fn test_generate_sends_preamble_and_prompt() {
        let server = MockServer::start().await;
        let expected = format!("{}\n\nMy prompt", SYSTEM_PREAMBLE);
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"contents": [{"parts": [{"text": expected}]}]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "ok"}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = GeminiProvider::new(server.uri()).unwrap();
        let request = GenerationRequest::new("My prompt", "m", "k");
        assert_eq!(provider.generate(&request).await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_generate_classifies_statuses() {
        let cases = [
            (429, "quota"),
            (403, "permission denied"),
            (400, "API key not valid"),
            (500, "internal"),
        ];

        for (status, message) in cases {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(
                    ResponseTemplate::new(status)
                        .set_body_json(json!({"error": {"code": status, "message": message}})),
                )
                .mount(&server)
                .await;

            let provider = GeminiProvider::new(server.uri()).unwrap();
            let request = GenerationRequest::new("p", "m", "k");
            let err = provider.generate(&request).await.unwrap_err();
            assert_eq!(err, LlmError::from_status(status, message));
        }
    }

    #[tokio::test]
    async fn test_generate_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let provider = GeminiProvider::new(server.uri()).unwrap();
        let request = GenerationRequest::new("p", "m", "k");
        let err = provider.generate(&request).await.unwrap_err();
        assert!(matches!(err, LlmError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_hides_key() {
        let provider = GeminiProvider::new("http://127.0.0.1:9").unwrap();
        let request = GenerationRequest::new("p", "m", "super-secret");
        let err = provider.generate(&request).await.unwrap_err();
        assert!(matches!(err, LlmError::Communication(_)));
        assert!(!err.to_string().contains("super-secret"));
    }
}
