/// LLM Client — the single point of entry for all generative-language API calls.
///
/// No other module may call the Gemini API directly. Handlers depend on the
/// `CompletionService` trait, carried in `AppState` as `Arc<dyn CompletionService>`.
///
/// One request per call: no retries and no timeout beyond the reqwest default.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// Model used when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A text-completion backend. Implement this to swap providers without
/// touching handlers or the analysis pipeline.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Sends one prompt and returns the completion text.
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: SystemInstruction<'a>,
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate. `None` when there is no text at all.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.is_empty()).then_some(text)
    }
}

/// Gemini `generateContent` client.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes a raw call to the Gemini API, returning the full response envelope.
    pub async fn call(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<GenerateContentResponse, LlmError> {
        let request_body = GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![RequestPart { text: system }],
            },
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let url = format!("{GEMINI_API_BASE}/{}:generateContent", self.model);
        let response = self
            .client
            .post(url)
            .query(&[("key", &self.api_key)])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GenerateContentResponse = response.json().await?;

        let finish_reason = envelope
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .unwrap_or("unknown");
        match &envelope.usage_metadata {
            Some(usage) => debug!(
                "Gemini call succeeded: finish_reason={}, prompt_tokens={}, candidate_tokens={}",
                finish_reason, usage.prompt_token_count, usage.candidates_token_count
            ),
            None => debug!("Gemini call succeeded: finish_reason={finish_reason}"),
        }

        Ok(envelope)
    }
}

#[async_trait]
impl CompletionService for GeminiClient {
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let envelope = self.call(prompt, system).await?;
        envelope.text().ok_or(LlmError::EmptyContent)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences and surrounding whitespace from LLM output.
/// Opening and closing fences are removed independently, so a lone one on either side goes too.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let text = match text.strip_prefix("```") {
        Some(inner) => match inner.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &inner[4..],
            _ => inner,
        },
        None => text,
    };
    let text = text.trim();
    text.strip_suffix("```").unwrap_or(text).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_with_uppercase_tag() {
        let input = "```JSON\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "  {\"key\": \"value\"}\n";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_unterminated() {
        let input = "```json\n{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_closing_fence_only() {
        let input = "{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_envelope_text_joins_first_candidate_parts() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"a\":"}, {"text": " 1}"}], "role": "model"},
                 "finishReason": "STOP"},
                {"content": {"parts": [{"text": "ignored"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 4}
        }"#;
        let envelope: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.text().as_deref(), Some("{\"a\": 1}"));
        assert_eq!(envelope.candidates[0].finish_reason.as_deref(), Some("STOP"));
        assert_eq!(envelope.usage_metadata.unwrap().prompt_token_count, 12);
    }

    #[test]
    fn test_envelope_without_candidates_has_no_text() {
        let envelope: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        assert!(envelope.text().is_none());
    }

    #[test]
    fn test_envelope_with_empty_parts_has_no_text() {
        let envelope: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": []}}]}"#).unwrap();
        assert!(envelope.text().is_none());
    }

    #[test]
    fn test_request_body_uses_gemini_field_names() {
        let body = GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![RequestPart { text: "sys" }],
            },
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: "hello" }],
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "sys");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(value["contents"][0]["role"], "user");
    }
}
