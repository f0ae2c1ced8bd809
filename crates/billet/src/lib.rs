//! billet - Social-media content generation over generative-AI providers.
//!
//! billet turns a topic and a tone into a social-media post: the copy, an
//! English-only image-description prompt derived from the topic, and
//! (optionally) a synthesized image persisted behind a time-limited URL.
//! Provider calls are unreliable and quota-limited, so every call runs
//! inside a classification-driven retry loop with linear backoff and
//! graceful degradation.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use billet::{ContentGenerator, GeminiTextProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = ContentGenerator::new(GeminiTextProvider::new()?);
//!
//!     let post = generator.post_text("kitchen knives", "upbeat").await?;
//!     let prompt = generator.image_prompt("kitchen knives").await?;
//!     println!("{}\n---\n{}", post.text, prompt.text);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! billet is organized as a workspace with focused crates:
//!
//! - `billet_core` - Core data types (requests, outcomes)
//! - `billet_interface` - Provider and storage capability traits
//! - `billet_error` - Error types and the failure taxonomy
//! - `billet_retry` - The retry decision function and its configuration
//! - `billet_storage` - Artifact storage for generated images
//! - `billet_providers` - Gemini and DeepSeek adapters
//!
//! This crate (`billet`) holds the `ContentGenerator` orchestration and
//! re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generator;
mod prompts;

pub use generator::ContentGenerator;

// Re-exports for convenience
pub use billet_core::{
    CompletionRequest, GeneratedText, GenerationFailure, GenerationKind, GenerationRequest,
    ImagePrompt, StoredImage, init_telemetry, shutdown_telemetry, trim_response,
};
pub use billet_error::{
    BilletError, BilletResult, FailureClass, ProviderError, ProviderErrorKind,
};
pub use billet_interface::{ArtifactStore, ImageProvider, TextProvider};
pub use billet_retry::{BilletConfig, RetryConfig, RetryDecision, RetryPolicy, RetryState};
pub use billet_storage::FileSystemArtifactStore;

#[cfg(feature = "providers")]
pub use billet_providers::{DeepSeekTextProvider, GeminiImageProvider, GeminiTextProvider};
