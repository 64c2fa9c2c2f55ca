//! Gemini REST client.
//!
//! Wraps a single `gemini_rust::Gemini` client bound to the configured model.
//! The whole prompt is sent as one user message and the response text is
//! returned trimmed. There is no retry: a failed call is reported as-is.

use async_trait::async_trait;
use gemini_rust::{Gemini, client::Model};
use tracing::{debug, instrument};

use montage_error::{ConfigError, GenerationError, GenerationErrorKind, MontageResult};
use montage_interface::TextGenerator;

use super::{GeminiConfig, GeminiResult};

/// Text generation client for Google Gemini.
pub struct GeminiClient {
    /// Underlying SDK client, absent when no API key was configured
    client: Option<Gemini>,
    /// Model used for every request
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model_name", &self.model_name)
            .field("configured", &self.client.is_some())
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Convert a model name string to a gemini-rust Model enum variant.
    ///
    /// Uses Model::Custom for unrecognized model names, adding the "models/"
    /// prefix required by the Gemini API.
    ///
    /// - "gemini-2.5-flash" → Model::Gemini25Flash
    /// - "gemini-2.0-flash" → Model::Custom("models/gemini-2.0-flash")
    /// - "models/gemini-2.0-flash" → Model::Custom("models/gemini-2.0-flash") (preserved)
    fn model_name_to_enum(name: &str) -> Model {
        match name {
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other if other.starts_with("models/") => Model::Custom(other.to_string()),
            other => Model::Custom(format!("models/{}", other)),
        }
    }

    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an API key is present but the SDK client cannot be
    /// built. A missing key is not an error here.
    #[instrument(name = "gemini_client_new", fields(model = %config.model))]
    pub fn new(config: GeminiConfig) -> MontageResult<Self> {
        let client = match &config.api_key {
            Some(api_key) => Some(
                Gemini::with_model(api_key, Self::model_name_to_enum(&config.model)).map_err(
                    |e| GenerationError::new(GenerationErrorKind::ClientCreation(e.to_string())),
                )?,
            ),
            None => None,
        };

        Ok(Self {
            client,
            model_name: config.model,
        })
    }

    /// Internal generate method that returns Gemini-specific errors.
    async fn generate_internal(&self, client: &Gemini, prompt: &str) -> GeminiResult<String> {
        let response = client
            .generate_content()
            .with_user_message(prompt)
            .execute()
            .await
            .map_err(Self::parse_gemini_error)?;

        Ok(response.text().trim().to_string())
    }

    /// Parse gemini-rust errors to extract HTTP status codes.
    fn parse_gemini_error(err: impl std::fmt::Display) -> GenerationError {
        let err_msg = err.to_string();

        // Example: "bad response from server; code 503; description: ..."
        if let Some(status_code) = Self::extract_status_code(&err_msg) {
            GenerationError::new(GenerationErrorKind::HttpError {
                status_code,
                message: err_msg,
            })
        } else {
            GenerationError::new(GenerationErrorKind::ApiRequest(err_msg))
        }
    }

    /// Extract HTTP status code from an error message string.
    fn extract_status_code(error_msg: &str) -> Option<u16> {
        let code_start = error_msg.find("code ")?;
        let code_str = &error_msg[code_start + 5..];
        let end = code_str
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(code_str.len());
        code_str[..end].parse().ok()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, prompt), fields(model = %self.model_name, prompt_len = prompt.len()))]
    async fn generate_text(&self, prompt: &str) -> MontageResult<String> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| ConfigError::new("GEMINI_API_KEY is not configured"))?;

        let text = self.generate_internal(client, prompt).await?;
        debug!(response_len = text.len(), "Gemini generation complete");
        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn ensure_configured(&self) -> MontageResult<()> {
        match self.client {
            Some(_) => Ok(()),
            None => Err(ConfigError::new("GEMINI_API_KEY is not configured").into()),
        }
    }
}
