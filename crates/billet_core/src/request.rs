//! Request types for content generation.

use serde::{Deserialize, Serialize};

/// What a generation call is asked to produce.
///
/// # Examples
///
/// ```
/// use billet_core::GenerationKind;
///
/// assert_eq!(format!("{}", GenerationKind::PostText), "post_text");
/// assert_ne!(GenerationKind::PostText, GenerationKind::Image);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum GenerationKind {
    /// The social-media post body itself
    #[display("post_text")]
    PostText,
    /// An English-only prompt describing the accompanying image
    #[display("image_description")]
    ImageDescription,
    /// The synthesized image
    #[display("image")]
    Image,
}

/// One content generation call, as requested by the caller.
///
/// Immutable once built; a fresh request is constructed per call.
///
/// # Examples
///
/// ```
/// use billet_core::{GenerationKind, GenerationRequest};
///
/// let request = GenerationRequest::builder()
///     .topic("kitchen knives")
///     .tone("upbeat")
///     .kind(GenerationKind::PostText)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.topic(), "kitchen knives");
/// assert_eq!(*request.kind(), GenerationKind::PostText);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Subject the content should cover
    topic: String,
    /// Voice the post copy should be written in
    tone: String,
    /// What this call produces
    kind: GenerationKind,
}

impl GenerationRequest {
    /// Construct a request directly.
    pub fn new(topic: impl Into<String>, tone: impl Into<String>, kind: GenerationKind) -> Self {
        Self {
            topic: topic.into(),
            tone: tone.into(),
            kind,
        }
    }

    /// Start building a request.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

/// The wire-agnostic prompt handed to a text provider.
///
/// Providers translate this into their own request shape; nothing here is
/// vendor-specific. Temperature and token limits are fixed by the calling
/// operation, not by the end user.
///
/// # Examples
///
/// ```
/// use billet_core::CompletionRequest;
///
/// let req = CompletionRequest::builder()
///     .system_instruction("You are an SMM specialist.")
///     .user_instruction("Write a post about kitchen knives.")
///     .temperature(0.4_f32)
///     .max_tokens(2048_u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(*req.max_tokens(), 2048);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// Standing instruction establishing the provider's role
    system_instruction: String,
    /// The concrete ask for this call
    user_instruction: String,
    /// Sampling temperature
    temperature: f32,
    /// Output token ceiling
    max_tokens: u32,
}

impl CompletionRequest {
    /// Construct a completion request directly.
    pub fn new(
        system_instruction: impl Into<String>,
        user_instruction: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            user_instruction: user_instruction.into(),
            temperature,
            max_tokens,
        }
    }

    /// Start building a completion request.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}
