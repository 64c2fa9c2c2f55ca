//! Gemini client configuration.

/// Connection settings for the Gemini API.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GeminiConfig {
    /// Model identifier (e.g., "gemini-2.5-flash")
    pub model: String,
    /// API key; calls fail with a configuration error when absent
    pub api_key: Option<String>,
}

impl GeminiConfig {
    /// Create a configuration for a model without a credential.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_key: None,
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
