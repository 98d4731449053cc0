//! Gemini provider implementation.
//!
//! Sends one `generateContent` call per analysis, carrying the prompt and the
//! photo as inline base64 data. Streaming is not used.

use super::{FinishReason, ProviderError, ProviderResponse, VisionProvider};
use crate::config::GeminiSettings;
use crate::models::PartImage;
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Header carrying the API key. Keeps the key out of request URLs and logs.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Finish reasons after which a candidate's text is not usable.
const BLOCKING_FINISH_REASONS: [&str; 3] = ["SAFETY", "RECITATION", "LANGUAGE"];

/// Harm categories Gemini filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockNone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// Safety configuration sent with every analysis: filtering is switched off
/// for all four harm categories.
///
/// Photos of rusted, cracked or burnt parts trip the default filters, so
/// every request states `BLOCK_NONE` explicitly.
pub const SAFETY_FILTERS_DISABLED: [SafetySetting; 4] = [
    SafetySetting {
        category: HarmCategory::DangerousContent,
        threshold: HarmBlockThreshold::BlockNone,
    },
    SafetySetting {
        category: HarmCategory::HateSpeech,
        threshold: HarmBlockThreshold::BlockNone,
    },
    SafetySetting {
        category: HarmCategory::SexuallyExplicit,
        threshold: HarmBlockThreshold::BlockNone,
    },
    SafetySetting {
        category: HarmCategory::Harassment,
        threshold: HarmBlockThreshold::BlockNone,
    },
];

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Secret<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Option<std::time::Duration>,
}

impl From<&GeminiSettings> for GeminiConfig {
    fn from(settings: &GeminiSettings) -> Self {
        Self {
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            api_base: settings.api_base.clone(),
            timeout: settings.timeout,
        }
    }
}

/// Gemini multimodal provider.
pub struct GeminiVisionProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiVisionProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ProviderError::NotConfigured(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Build the API URL for the configured model and the given method.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.config.api_base, self.config.model, method
        )
    }
}

/// Build the request body for one analysis.
fn build_request<'a>(prompt: &'a str, image: &PartImage) -> GenerateContentRequest<'a> {
    GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![
                RequestPart::Text { text: prompt },
                RequestPart::InlineData {
                    inline_data: InlineData {
                        mime_type: image.mime_type.clone(),
                        data: STANDARD.encode(&image.data),
                    },
                },
            ],
        }],
        safety_settings: &SAFETY_FILTERS_DISABLED,
    }
}

#[async_trait]
impl VisionProvider for GeminiVisionProvider {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn analyze(
        &self,
        prompt: &str,
        image: &PartImage,
    ) -> Result<ProviderResponse, ProviderError> {
        let request = build_request(prompt, image);
        let url = self.api_url("generateContent");

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            image_bytes = image.data.len(),
            mime_type = %image.mime_type,
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.without_url().to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("Failed to parse response: {}", e.without_url())))?;

        api_response.into_provider_response()
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.config.api_key.expose_secret().is_empty() {
            return Err(ProviderError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    safety_settings: &'static [SafetySetting],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Text {
        text: &'a str,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

/// Only text parts matter here; other part kinds deserialize with `text: None`.
#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<i32>,
    candidates_token_count: Option<i32>,
}

impl GenerateContentResponse {
    /// Pull the first candidate's text out of the response.
    ///
    /// Text parts are joined in order with nothing in between. A blocked
    /// prompt or a candidate stopped for safety, recitation or language is an
    /// error. No candidates and no block reason yields empty text.
    fn into_provider_response(self) -> Result<ProviderResponse, ProviderError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(ProviderError::ContentFiltered(format!(
                "prompt blocked: {}",
                reason
            )));
        }

        let usage = self.usage_metadata.unwrap_or_default();
        let candidate = self.candidates.into_iter().next();

        let finish_reason = candidate
            .as_ref()
            .and_then(|c| c.finish_reason.as_deref())
            .unwrap_or("STOP");

        if BLOCKING_FINISH_REASONS.contains(&finish_reason) {
            return Err(ProviderError::ContentFiltered(format!(
                "candidate finished with {}",
                finish_reason
            )));
        }

        let finish_reason = match finish_reason {
            "STOP" => FinishReason::Complete,
            "MAX_TOKENS" => FinishReason::Length,
            _ => FinishReason::Other,
        };

        let text = candidate
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        Ok(ProviderResponse {
            text,
            input_tokens: usage.prompt_token_count.unwrap_or(0),
            output_tokens: usage.candidates_token_count.unwrap_or(0),
            finish_reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use serde_json::json;

    fn image() -> PartImage {
        PartImage {
            mime_type: "image/jpeg".to_string(),
            data: Bytes::from_static(&[0xff, 0xd8, 0xff, 0xe0]),
        }
    }

    fn parse(value: serde_json::Value) -> Result<ProviderResponse, ProviderError> {
        serde_json::from_value::<GenerateContentResponse>(value)
            .unwrap()
            .into_provider_response()
    }

    #[test]
    fn request_carries_prompt_then_inline_image() {
        let body = serde_json::to_value(build_request("describe", &image())).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0], json!({ "text": "describe" }));
        assert_eq!(
            body["contents"][0]["parts"][1],
            json!({ "inlineData": { "mimeType": "image/jpeg", "data": "/9j/4A==" } })
        );
    }

    #[test]
    fn request_disables_every_safety_filter() {
        let body = serde_json::to_value(build_request("describe", &image())).unwrap();

        assert_eq!(
            body["safetySettings"],
            json!([
                { "category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": "BLOCK_NONE" },
                { "category": "HARM_CATEGORY_HATE_SPEECH", "threshold": "BLOCK_NONE" },
                { "category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": "BLOCK_NONE" },
                { "category": "HARM_CATEGORY_HARASSMENT", "threshold": "BLOCK_NONE" },
            ])
        );
    }

    #[test]
    fn api_url_targets_model_method() {
        let provider = GeminiVisionProvider::new(GeminiConfig {
            api_key: Secret::new("key".to_string()),
            model: "gemini-1.5-flash".to_string(),
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: None,
        })
        .unwrap();

        assert_eq!(
            provider.api_url("generateContent"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn joins_text_parts_of_first_candidate() {
        let response = parse(json!({
            "candidates": [
                {
                    "content": { "role": "model", "parts": [{ "text": "Parça: " }, { "text": "fren diski\n" }] },
                    "finishReason": "STOP"
                },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ],
            "usageMetadata": { "promptTokenCount": 310, "candidatesTokenCount": 42, "totalTokenCount": 352 }
        }))
        .unwrap();

        assert_eq!(response.text, "Parça: fren diski\n");
        assert_eq!(response.input_tokens, 310);
        assert_eq!(response.output_tokens, 42);
        assert_eq!(response.finish_reason, FinishReason::Complete);
    }

    #[test]
    fn max_tokens_is_not_an_error() {
        let response = parse(json!({
            "candidates": [{ "content": { "parts": [{ "text": "partial" }] }, "finishReason": "MAX_TOKENS" }]
        }))
        .unwrap();

        assert_eq!(response.text, "partial");
        assert_eq!(response.finish_reason, FinishReason::Length);
    }

    #[test]
    fn blocked_prompt_is_an_error() {
        let result = parse(json!({ "promptFeedback": { "blockReason": "OTHER" } }));
        assert!(matches!(result, Err(ProviderError::ContentFiltered(_))));
    }

    #[test]
    fn safety_finish_is_an_error() {
        let result = parse(json!({ "candidates": [{ "finishReason": "SAFETY" }] }));
        assert!(matches!(result, Err(ProviderError::ContentFiltered(_))));
    }

    #[test]
    fn no_candidates_yields_empty_text() {
        let response = parse(json!({})).unwrap();
        assert_eq!(response.text, "");
    }
}
