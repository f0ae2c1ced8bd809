//! DeepSeek text adapter (OpenAI-compatible chat completions).

mod client;
mod dto;

pub use client::DeepSeekTextProvider;
