//! Trait definitions for the billet content generation library.
//!
//! The generator never talks to a vendor SDK directly; it goes through these
//! capability traits, so test doubles drop in where real adapters would be.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ArtifactStore, ImageProvider, TextProvider};
