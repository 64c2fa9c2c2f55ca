use async_trait::async_trait;
use montage_error::{ConfigError, ImageError, ImageErrorKind, MontageResult};
use montage_interface::ImageGenerator;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::instrument;

use super::FalConfig;

/// Request body sent to the model endpoint.
#[derive(Debug, Serialize)]
struct FalRequest<'a> {
    prompt: &'a str,
}

/// Client for a fal.ai image model.
#[derive(Debug, Clone)]
pub struct FalClient {
    config: FalConfig,
    client: reqwest::Client,
}

impl FalClient {
    /// Create a new fal client
    #[instrument(skip(config), fields(endpoint = %config.endpoint()))]
    pub fn new(config: FalConfig) -> Self {
        tracing::debug!("Creating fal client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &FalConfig {
        &self.config
    }

    /// Pick the output payload out of a response body.
    ///
    /// With an output field configured, returns that field, or an empty
    /// object when the field is missing or null. Without one, returns the
    /// body unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use montage_models::FalClient;
    /// use serde_json::json;
    ///
    /// let body = json!({ "output": { "url": "a.png" }, "requestId": "r1" });
    /// assert_eq!(FalClient::extract_output(body, Some("output")), json!({ "url": "a.png" }));
    ///
    /// let body = json!({ "requestId": "r1" });
    /// assert_eq!(FalClient::extract_output(body, Some("output")), json!({}));
    /// ```
    pub fn extract_output(body: Value, output_field: Option<&str>) -> Value {
        match output_field {
            None => body,
            Some(field) => match body {
                Value::Object(mut map) => match map.remove(field) {
                    Some(Value::Null) | None => json!({}),
                    Some(output) => output,
                },
                _ => json!({}),
            },
        }
    }

    /// Submit one prompt and return the decoded response body.
    #[instrument(skip(self, api_key, prompt), fields(model = %self.config.model))]
    async fn run(&self, api_key: &str, prompt: &str) -> Result<Value, ImageError> {
        let url = self.config.endpoint();
        tracing::debug!("Sending image request to {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Key {}", api_key))
            .json(&FalRequest { prompt })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request failed: {}", e);
                ImageError::new(ImageErrorKind::ApiRequest(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "fal returned error");
            return Err(ImageError::new(ImageErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse response: {}", e);
            ImageError::new(ImageErrorKind::Deserialization(e.to_string()))
        })
    }
}

#[async_trait]
impl ImageGenerator for FalClient {
    async fn generate_image(&self, prompt: &str) -> MontageResult<Value> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ConfigError::new("FAL_KEY is not configured"))?;

        let body = self.run(api_key, prompt).await?;
        Ok(Self::extract_output(
            body,
            self.config.output_field.as_deref(),
        ))
    }

    fn provider_name(&self) -> &'static str {
        "fal"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }

    fn ensure_configured(&self) -> MontageResult<()> {
        match self.config.api_key {
            Some(_) => Ok(()),
            None => Err(ConfigError::new("FAL_KEY is not configured").into()),
        }
    }
}
