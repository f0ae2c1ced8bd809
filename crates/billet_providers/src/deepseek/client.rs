//! DeepSeek chat-completions client.

use super::dto::{ChatMessage, ChatRequest, ChatResponse, extract_content};
use async_trait::async_trait;
use billet_core::CompletionRequest;
use billet_error::{BilletResult, ProviderError, ProviderErrorKind};
use billet_interface::TextProvider;
use std::env;
use tracing::{debug, instrument};

const API_KEY_VAR: &str = "DEEPSEEK_API_KEY";
const DEFAULT_MODEL: &str = "deepseek-chat";
const COMPLETIONS_URL: &str = "https://api.deepseek.com/chat/completions";

/// Text-completion adapter for the DeepSeek API.
///
/// DeepSeek speaks the OpenAI chat-completions dialect, so this is a plain
/// REST client with bearer auth.
#[derive(Debug, Clone)]
pub struct DeepSeekTextProvider {
    client: reqwest::Client,
    api_key: String,
    model_name: String,
    base_url: String,
}

impl DeepSeekTextProvider {
    /// Create an adapter for the default model.
    ///
    /// Reads the API key from the `DEEPSEEK_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns error if the key is not set.
    #[instrument(name = "deepseek_new")]
    pub fn new() -> BilletResult<Self> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| {
            ProviderError::new(ProviderErrorKind::MissingApiKey(API_KEY_VAR.to_string()))
        })?;
        Ok(Self::with_api_key(api_key, DEFAULT_MODEL.to_string()))
    }

    /// Create an adapter with an explicit API key and model.
    #[instrument(name = "deepseek_with_api_key", skip(api_key), fields(model = %model_name))]
    pub fn with_api_key(api_key: String, model_name: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model_name,
            base_url: COMPLETIONS_URL.to_string(),
        }
    }

    /// Point the adapter at a different endpoint (local proxies, tests).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

#[async_trait]
impl TextProvider for DeepSeekTextProvider {
    #[instrument(skip(self, req), fields(provider = "deepseek", model = %self.model_name))]
    async fn complete(&self, req: &CompletionRequest) -> Result<String, ProviderError> {
        let payload = ChatRequest {
            model: self.model_name.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: req.system_instruction().clone(),
                },
                ChatMessage {
                    role: "user",
                    content: req.user_instruction().clone(),
                },
            ],
            temperature: *req.temperature(),
            max_tokens: *req.max_tokens(),
        };

        debug!(url = %self.base_url, "Sending DeepSeek completion request");

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
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

        let body: ChatResponse = response.json().await.map_err(|e| {
            ProviderError::new(ProviderErrorKind::ResponseParsing(e.to_string()))
        })?;

        let text = extract_content(body)?;
        debug!(response_len = text.len(), "DeepSeek completion succeeded");
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "deepseek"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
