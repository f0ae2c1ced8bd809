//! Gemini image adapter over the REST `generateContent` endpoint.
//!
//! The `gemini-rust` SDK covers text generation; image response modalities
//! go through the REST API directly. The response interleaves text and
//! image parts, and the image part is located by its MIME type.

use super::API_KEY_VAR;
use async_trait::async_trait;
use base64::Engine as _;
use billet_error::{BilletResult, ProviderError, ProviderErrorKind};
use billet_interface::ImageProvider;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, instrument};

const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Image-synthesis adapter for the Google Gemini API.
#[derive(Clone)]
pub struct GeminiImageProvider {
    client: reqwest::Client,
    api_key: String,
    model_name: String,
}

impl std::fmt::Debug for GeminiImageProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiImageProvider")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiImageProvider {
    /// Create an adapter for the default image-capable model.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns error if the key is not set.
    #[instrument(name = "gemini_image_new")]
    pub fn new() -> BilletResult<Self> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| {
            ProviderError::new(ProviderErrorKind::MissingApiKey(API_KEY_VAR.to_string()))
        })?;
        Ok(Self::with_api_key(api_key, DEFAULT_MODEL.to_string()))
    }

    /// Create an adapter with an explicit API key and model.
    #[instrument(name = "gemini_image_with_api_key", skip(api_key), fields(model = %model_name))]
    pub fn with_api_key(api_key: String, model_name: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model_name,
        }
    }
}

#[async_trait]
impl ImageProvider for GeminiImageProvider {
    #[instrument(skip(self, prompt), fields(provider = "gemini", model = %self.model_name, prompt_len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>, ProviderError> {
        let url = format!(
            "{}/{}:generateContent",
            BASE_URL, self.model_name
        );
        debug!(url = %url, "Sending image generation request");

        let payload = GenerateContentRequest::for_prompt(prompt);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                ProviderError::new(ProviderErrorKind::Transport(format!(
                    "Request failed: {}",
                    e
                )))
            })?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::new(ProviderErrorKind::HttpError {
                status_code,
                message,
            }));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            ProviderError::new(ProviderErrorKind::ResponseParsing(e.to_string()))
        })?;

        let bytes = extract_image_bytes(&body)?;
        debug!(size = bytes.len(), "Image generation succeeded");
        Ok(bytes)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

/// Find the inline image part and decode its base64 payload.
///
/// A well-formed reply with no image part is an empty response, not a
/// protocol error: the model sometimes answers with text only.
fn extract_image_bytes(body: &GenerateContentResponse) -> Result<Vec<u8>, ProviderError> {
    let parts = body
        .candidates
        .as_deref()
        .and_then(|c| c.first())
        .and_then(|c| c.content.as_ref())
        .map(|content| content.parts.as_slice())
        .unwrap_or_default();

    let image_part = parts.iter().find_map(|part| {
        let inline = part.inline_data.as_ref()?;
        match &inline.mime_type {
            Some(mime) if mime.starts_with("image/") => Some(inline),
            _ => None,
        }
    });

    let Some(inline) = image_part else {
        return Err(ProviderError::new(ProviderErrorKind::EmptyResponse));
    };

    base64::engine::general_purpose::STANDARD
        .decode(&inline.data)
        .map_err(|e| ProviderError::new(ProviderErrorKind::Base64Decode(e.to_string())))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    fn for_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                    inline_data: None,
                }],
            }],
            generation_config: GenerationConfig {
                candidate_count: 1,
                max_output_tokens: 2048,
                temperature: 0.5,
                response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    candidate_count: u32,
    max_output_tokens: u32,
    temperature: f32,
    response_modalities: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: Option<String>,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use billet_error::FailureClass;

    #[test]
    fn image_part_is_found_and_decoded() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {
                        "parts": [
                            {"text": "Here is your image:"},
                            {"inlineData": {"mimeType": "image/png", "data": "aGVsbG8="}}
                        ]
                    }
                }]
            }"#,
        )
        .unwrap();

        let bytes = extract_image_bytes(&body).unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn text_only_reply_is_an_empty_response() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "cannot draw that"}]}}]}"#,
        )
        .unwrap();

        let err = extract_image_bytes(&body).unwrap_err();
        assert_eq!(err.classify(), FailureClass::EmptyResponse);
    }

    #[test]
    fn missing_candidates_is_an_empty_response() {
        let body: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();

        let err = extract_image_bytes(&body).unwrap_err();
        assert_eq!(err.classify(), FailureClass::EmptyResponse);
    }

    #[test]
    fn broken_base64_is_fatal() {
        let body: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {
                        "parts": [{"inlineData": {"mimeType": "image/png", "data": "@@not-base64@@"}}]
                    }
                }]
            }"#,
        )
        .unwrap();

        let err = extract_image_bytes(&body).unwrap_err();
        assert_eq!(err.classify(), FailureClass::Fatal);
    }

    #[test]
    fn request_payload_serializes_with_camel_case_config() {
        let payload = GenerateContentRequest::for_prompt("a knife");
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["contents"][0]["parts"][0]["text"], "a knife");
        assert_eq!(json["generationConfig"]["candidateCount"], 1);
        assert_eq!(json["generationConfig"]["responseModalities"][0], "IMAGE");
    }
}
