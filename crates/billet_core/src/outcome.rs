//! Terminal outcome types for generation calls.
//!
//! A generation call ends in exactly one of these values. Once returned, the
//! outcome is final: no further retries happen, and re-invoking the workflow
//! is the caller's decision.

use billet_error::FailureClass;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trimmed post copy produced by a text provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedText {
    /// The post body, whitespace- and quote-trimmed
    pub text: String,
}

/// An image-description prompt, with its post-hoc validation flag.
///
/// The prompt is expected to be English-only ASCII. A violation degrades the
/// result (`ascii` is false, the event is logged) but does not fail it; the
/// text is returned unmodified either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePrompt {
    /// The image-description prompt, whitespace- and quote-trimmed
    pub text: String,
    /// Whether the prompt passed the ASCII-only check
    pub ascii: bool,
}

impl ImagePrompt {
    /// Wrap a trimmed prompt, running the ASCII validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use billet_core::ImagePrompt;
    ///
    /// assert!(ImagePrompt::validated("a steel knife, 8k".to_string()).ascii);
    /// assert!(!ImagePrompt::validated("нож".to_string()).ascii);
    /// ```
    pub fn validated(text: String) -> Self {
        let ascii = text.is_ascii();
        Self { text, ascii }
    }
}

/// Retrieval handle for a stored, generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredImage {
    /// Time-limited retrieval URL
    pub url: String,
    /// When the URL stops being valid
    pub expires_at: DateTime<Utc>,
}

/// The terminal failure value of a generation call.
///
/// Returned to the caller instead of a raw provider error; carries the
/// taxonomy class, a human-readable message, and how many provider
/// invocations were made before giving up.
///
/// # Examples
///
/// ```
/// use billet_core::GenerationFailure;
/// use billet_error::FailureClass;
///
/// let failure = GenerationFailure {
///     class: FailureClass::EmptyResponse,
///     message: "no content after 3 attempts".to_string(),
///     attempts: 3,
/// };
/// assert!(format!("{}", failure).contains("empty_response"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Generation failed ({}) after {} attempt(s): {}", class, attempts, message)]
pub struct GenerationFailure {
    /// Taxonomy bucket of the final failure
    pub class: FailureClass,
    /// Human-readable description of what went wrong
    pub message: String,
    /// Provider invocations made before giving up
    pub attempts: u32,
}
