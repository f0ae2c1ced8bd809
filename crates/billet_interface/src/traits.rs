//! Capability traits for providers and artifact storage.

use async_trait::async_trait;
use billet_core::{CompletionRequest, StoredImage};
use billet_error::{BilletResult, ProviderError};

/// A text-completion backend.
///
/// Implementations translate the wire-agnostic [`CompletionRequest`] into
/// their own request shape and return the raw response text. Failures come
/// back as classified [`ProviderError`]s, including the empty-response case,
/// which adapters report as an error value rather than an empty `Ok` so the
/// retry layer can branch on it.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Run one completion call. No retries happen at this level.
    async fn complete(&self, req: &CompletionRequest) -> Result<String, ProviderError>;

    /// Provider name (e.g., "gemini", "deepseek").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "deepseek-chat").
    fn model_name(&self) -> &str;
}

/// An image-synthesis backend.
///
/// Given a finished image-description prompt, returns one image as raw bytes.
/// The prompt is passed through unchanged; prompt construction belongs to the
/// text side of the workflow.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Synthesize one image for the prompt. No retries happen at this level.
    async fn generate(&self, prompt: &str) -> Result<Vec<u8>, ProviderError>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

/// A store for generated image artifacts.
///
/// Implementations persist the bytes and hand back a time-limited retrieval
/// handle. The suggested name is advisory; stores sanitize it into their own
/// naming scheme.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Persist the artifact and return its retrieval handle.
    async fn put(&self, bytes: &[u8], suggested_name: &str) -> BilletResult<StoredImage>;
}
