//! Gemini text adapter over the `gemini-rust` SDK.

use super::{API_KEY_VAR, parse_sdk_error};
use async_trait::async_trait;
use billet_core::CompletionRequest;
use billet_error::{BilletResult, ProviderError, ProviderErrorKind};
use billet_interface::TextProvider;
use gemini_rust::{Gemini, client::Model};
use std::env;
use tracing::{debug, instrument};

const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Text-completion adapter for the Google Gemini API.
///
/// One client per model; construct another instance for a different model.
///
/// # Example
///
/// ```no_run
/// use billet_providers::GeminiTextProvider;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = GeminiTextProvider::new()?;
/// # Ok(())
/// # }
/// ```
pub struct GeminiTextProvider {
    client: Gemini,
    model_name: String,
}

impl std::fmt::Debug for GeminiTextProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiTextProvider")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiTextProvider {
    /// Create an adapter for the default model.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns error if the key is missing or the SDK client cannot be built.
    #[instrument(name = "gemini_text_new")]
    pub fn new() -> BilletResult<Self> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| {
            ProviderError::new(ProviderErrorKind::MissingApiKey(API_KEY_VAR.to_string()))
        })?;
        Self::with_api_key(api_key, DEFAULT_MODEL.to_string())
    }

    /// Create an adapter with an explicit API key and model.
    ///
    /// # Errors
    ///
    /// Returns error if the SDK client cannot be built.
    #[instrument(name = "gemini_text_with_api_key", skip(api_key), fields(model = %model_name))]
    pub fn with_api_key(api_key: String, model_name: String) -> BilletResult<Self> {
        let client = Gemini::with_model(&api_key, Self::model_name_to_enum(&model_name))
            .map_err(|e| {
                ProviderError::new(ProviderErrorKind::ClientCreation(e.to_string()))
            })?;

        Ok(Self { client, model_name })
    }

    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Unrecognized names use Model::Custom with the "models/" prefix the
    /// API requires.
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => {
                if other.starts_with("models/") {
                    Model::Custom(other.to_string())
                } else {
                    Model::Custom(format!("models/{}", other))
                }
            }
        }
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    #[instrument(skip(self, req), fields(provider = "gemini", model = %self.model_name))]
    async fn complete(&self, req: &CompletionRequest) -> Result<String, ProviderError> {
        let response = self
            .client
            .generate_content()
            .with_system_prompt(req.system_instruction())
            .with_user_message(req.user_instruction())
            .with_temperature(*req.temperature())
            .with_max_output_tokens(*req.max_tokens() as i32)
            .execute()
            .await
            .map_err(parse_sdk_error)?;

        let text = response.text();
        if text.trim().is_empty() {
            return Err(ProviderError::new(ProviderErrorKind::EmptyResponse));
        }

        debug!(response_len = text.len(), "Gemini completion succeeded");
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
