//! Error types for the billet content generation library.
//!
//! This crate provides the foundation error types used throughout the billet
//! workspace, plus the failure taxonomy that drives retry decisions.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Provider errors additionally carry a [`FailureClass`], the taxonomy bucket
//! the retry layer branches on.
//!
//! # Examples
//!
//! ```
//! use billet_error::{BilletResult, ProviderError, ProviderErrorKind};
//!
//! fn call_provider() -> BilletResult<String> {
//!     Err(ProviderError::new(ProviderErrorKind::EmptyResponse))?
//! }
//!
//! match call_provider() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod class;
mod config;
mod error;
mod provider;
mod storage;

pub use builder::{BuilderError, BuilderErrorKind};
pub use class::FailureClass;
pub use config::ConfigError;
pub use error::{BilletError, BilletErrorKind, BilletResult};
pub use provider::{ProviderError, ProviderErrorKind};
pub use storage::{StorageError, StorageErrorKind};
