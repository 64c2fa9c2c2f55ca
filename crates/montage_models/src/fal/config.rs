//! fal.ai client configuration.

/// Connection settings for a fal.ai model endpoint.
///
/// # Examples
///
/// ```
/// use montage_models::FalConfigBuilder;
///
/// let config = FalConfigBuilder::default()
///     .model("fal-ai/flux/schnell")
///     .api_key(Some("secret".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url, "https://fal.run");
/// assert_eq!(config.output_field.as_deref(), Some("output"));
/// assert_eq!(config.endpoint(), "https://fal.run/fal-ai/flux/schnell");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, derive_builder::Builder)]
#[builder(setter(into))]
pub struct FalConfig {
    /// Base URL of the synchronous fal endpoint
    #[builder(default = "\"https://fal.run\".to_string()")]
    pub base_url: String,
    /// Model endpoint id (e.g., "fal-ai/flux/schnell")
    pub model: String,
    /// API key; calls fail with a configuration error when absent
    #[builder(default)]
    pub api_key: Option<String>,
    /// Response field holding the output payload; `None` keeps the whole body
    #[builder(default = "Some(\"output\".to_string())")]
    pub output_field: Option<String>,
}

impl FalConfig {
    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.model.trim_start_matches('/')
        )
    }
}

impl std::fmt::Debug for FalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FalConfig")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("output_field", &self.output_field)
            .finish()
    }
}
