//! Trait definitions for generation backends.

use async_trait::async_trait;
use montage_error::MontageResult;

/// A text (LLM) generation backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one prompt and return the model's raw text, trimmed of surrounding
    /// whitespace.
    async fn generate_text(&self, prompt: &str) -> MontageResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;

    /// Fail fast when the backend cannot make calls at all (e.g., a missing
    /// credential). Checked before any outbound request of a run.
    fn ensure_configured(&self) -> MontageResult<()> {
        Ok(())
    }
}

/// An image generation backend.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image for a prompt and return the provider's output
    /// payload.
    ///
    /// When the provider answers without an output payload the implementation
    /// returns an empty JSON object rather than an error.
    async fn generate_image(&self, prompt: &str) -> MontageResult<serde_json::Value>;

    /// Provider name (e.g., "fal").
    fn provider_name(&self) -> &'static str;

    /// Model or endpoint identifier (e.g., "fal-ai/flux/schnell").
    fn model_name(&self) -> &str;

    /// Fail fast when the backend cannot make calls at all (e.g., a missing
    /// credential). Checked before any outbound request of a run.
    fn ensure_configured(&self) -> MontageResult<()> {
        Ok(())
    }
}
