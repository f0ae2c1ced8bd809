//! Core data types for the billet content generation library.
//!
//! This crate provides the foundation data types shared by the generator,
//! provider adapters, and storage backends: the per-call generation request,
//! the wire-agnostic completion prompt, and the terminal outcome types.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod outcome;
mod request;
mod telemetry;
mod trim;

pub use outcome::{GeneratedText, GenerationFailure, ImagePrompt, StoredImage};
pub use request::{
    CompletionRequest, CompletionRequestBuilder, GenerationKind, GenerationRequest,
    GenerationRequestBuilder,
};
pub use telemetry::{init_telemetry, shutdown_telemetry};
pub use trim::trim_response;
