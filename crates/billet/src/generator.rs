//! The content generation workflow.

use crate::prompts;
use billet_core::{
    GeneratedText, GenerationFailure, GenerationKind, GenerationRequest, ImagePrompt,
    StoredImage, trim_response,
};
use billet_error::{FailureClass, ProviderError};
use billet_interface::{ArtifactStore, ImageProvider, TextProvider};
use billet_retry::{RetryDecision, RetryPolicy, RetryState};
use std::future::Future;
use tracing::{error, instrument, warn};

/// Orchestrates one "generate post" workflow over an injected text provider.
///
/// The generator owns no mutable state: the provider instance is constructed
/// once, passed in, and shared immutably, so one generator per concurrent
/// task is safe and test doubles drop in without any global setup. Every
/// provider call runs inside the classified retry loop; the caller receives
/// either a trimmed result or a terminal [`GenerationFailure`], never a raw
/// provider error.
///
/// # Example
///
/// ```rust,ignore
/// use billet::{ContentGenerator, DeepSeekTextProvider};
///
/// let generator = ContentGenerator::new(DeepSeekTextProvider::new()?);
/// let post = generator.post_text("kitchen knives", "upbeat").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ContentGenerator<T> {
    text_provider: T,
    policy: RetryPolicy,
}

impl<T: TextProvider> ContentGenerator<T> {
    /// Create a generator with the default retry policy (3 attempts, 5 s step).
    pub fn new(text_provider: T) -> Self {
        Self::with_policy(text_provider, RetryPolicy::default())
    }

    /// Create a generator with an explicit retry policy.
    pub fn with_policy(text_provider: T, policy: RetryPolicy) -> Self {
        Self {
            text_provider,
            policy,
        }
    }

    /// Generate the social-media post body for a topic in a tone.
    ///
    /// The tone goes into the system instruction and the topic into the user
    /// instruction. The response is trimmed of surrounding whitespace and one
    /// layer of enclosing quotes before being returned.
    #[instrument(skip(self), fields(provider = self.text_provider.provider_name()))]
    pub async fn post_text(
        &self,
        topic: &str,
        tone: &str,
    ) -> Result<GeneratedText, GenerationFailure> {
        let request = GenerationRequest::new(topic, tone, GenerationKind::PostText);
        let completion = prompts::post_text_request(topic, tone);

        let (raw, _) = run_with_retry(&self.policy, *request.kind(), || {
            self.text_provider.complete(&completion)
        })
        .await?;

        Ok(GeneratedText {
            text: trim_response(&raw),
        })
    }

    /// Generate an image-description prompt for a topic.
    ///
    /// The provider is instructed to emit only an English-language, visually
    /// detailed image-generation prompt. The output is validated post-hoc to
    /// be ASCII; a violation degrades the result (flag cleared, warning
    /// logged) but the prompt is still returned unmodified.
    #[instrument(skip(self), fields(provider = self.text_provider.provider_name()))]
    pub async fn image_prompt(&self, topic: &str) -> Result<ImagePrompt, GenerationFailure> {
        let request = GenerationRequest::new(topic, "", GenerationKind::ImageDescription);
        let completion = prompts::image_prompt_request(topic);

        let (raw, _) = run_with_retry(&self.policy, *request.kind(), || {
            self.text_provider.complete(&completion)
        })
        .await?;

        let prompt = ImagePrompt::validated(trim_response(&raw));
        if !prompt.ascii {
            warn!(topic, "image prompt contains non-ASCII characters; passing through");
        }
        Ok(prompt)
    }

    /// Synthesize and persist the image for a finished description prompt.
    ///
    /// The prompt text is passed to the backend unchanged. The image provider
    /// call runs under the same retry policy as the text operations: a quota
    /// rejection from the image backend backs off exactly like one from the
    /// text backend. On success the bytes go to the artifact store and its
    /// retrieval handle is returned; a storage failure is terminal.
    #[instrument(skip_all, fields(provider = image_provider.provider_name(), prompt_len = prompt.text.len()))]
    pub async fn image<I, S>(
        &self,
        prompt: &ImagePrompt,
        image_provider: &I,
        store: &S,
    ) -> Result<StoredImage, GenerationFailure>
    where
        I: ImageProvider + ?Sized,
        S: ArtifactStore + ?Sized,
    {
        let (bytes, attempts) = run_with_retry(&self.policy, GenerationKind::Image, || {
            image_provider.generate(&prompt.text)
        })
        .await?;

        store.put(&bytes, &prompt.text).await.map_err(|e| {
            error!(error = %e, "failed to persist generated image");
            GenerationFailure {
                class: FailureClass::Fatal,
                message: e.to_string(),
                attempts,
            }
        })
    }
}

/// Drive one provider operation to a terminal outcome.
///
/// Classifies each failure, asks the policy what to do, sleeps prescribed
/// delays on the calling task, and counts attempts. Returns the successful
/// output together with the number of provider invocations made.
async fn run_with_retry<O, F, Fut>(
    policy: &RetryPolicy,
    kind: GenerationKind,
    mut call: F,
) -> Result<(O, u32), GenerationFailure>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<O, ProviderError>>,
{
    let mut state = RetryState::new(policy.max_attempts());

    loop {
        match call().await {
            Ok(output) => return Ok((output, state.attempts_made())),
            Err(err) => {
                let class = err.classify();
                state.record(class);

                match policy.decide(class, state.attempt()) {
                    RetryDecision::Retry(delay) => {
                        if delay.is_zero() {
                            warn!(
                                kind = %kind,
                                class = %class,
                                attempt = state.attempt(),
                                "provider call failed; retrying immediately"
                            );
                        } else {
                            warn!(
                                kind = %kind,
                                class = %class,
                                attempt = state.attempt(),
                                delay_ms = delay.as_millis() as u64,
                                "provider call failed; retrying after backoff"
                            );
                            tokio::time::sleep(delay).await;
                        }
                        state.advance();
                    }
                    RetryDecision::GiveUp => {
                        if class.is_retryable() {
                            error!(
                                kind = %kind,
                                class = %class,
                                attempts = state.attempts_made(),
                                "provider retries exhausted"
                            );
                        } else {
                            error!(kind = %kind, error = %err, "fatal provider error; not retrying");
                        }
                        return Err(GenerationFailure {
                            class,
                            message: err.to_string(),
                            attempts: state.attempts_made(),
                        });
                    }
                }
            }
        }
    }
}
