//! Generative-AI provider adapters for billet.
//!
//! Each adapter implements one of the capability traits from
//! `billet_interface` against a concrete vendor API, translating vendor
//! failures into classified `ProviderError`s at the boundary. Empty
//! responses and quota signals come back as error values, never as
//! exceptions the caller has to pattern-match out of strings.
//!
//! Providers are feature-gated:
//! - `gemini` - Google Gemini text and image adapters
//! - `deepseek` - DeepSeek text adapter (OpenAI-compatible REST)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "deepseek")]
mod deepseek;
#[cfg(feature = "gemini")]
mod gemini;

#[cfg(feature = "deepseek")]
pub use deepseek::DeepSeekTextProvider;
#[cfg(feature = "gemini")]
pub use gemini::{GeminiImageProvider, GeminiTextProvider};
