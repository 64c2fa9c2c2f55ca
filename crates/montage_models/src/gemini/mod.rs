//! Google Gemini text generation.

mod client;
mod config;

pub use client::GeminiClient;
pub use config::GeminiConfig;

/// Result type for Gemini operations.
pub(crate) type GeminiResult<T> = Result<T, montage_error::GenerationError>;
