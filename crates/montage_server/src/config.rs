//! Service configuration.
//!
//! Values are layered with increasing precedence:
//! - bundled defaults (`include_str!` of `montage.toml`)
//! - `~/.config/montage/montage.toml`
//! - `./montage.toml`
//! - an explicit file passed on the command line
//! - `MONTAGE__*` environment variables (`__` separates nesting levels)
//!
//! Provider credentials are read from `GEMINI_API_KEY` and `FAL_KEY` once at
//! load time and travel with the configuration from then on.

use config::{Config, Environment, File, FileFormat};
use montage_error::{ConfigError, MontageResult};
use montage_models::{FalConfig, FalConfigBuilder, GeminiConfig};
use montage_pipeline::{FanOutPolicy, PipelineSettings};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../montage.toml");

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable holding the fal.ai API key.
pub const FAL_KEY_VAR: &str = "FAL_KEY";

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

/// Text generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Gemini model name
    pub model: String,
    /// Deadline for one generation call
    pub timeout_secs: u64,
}

/// Image generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImagesConfig {
    /// fal.ai model endpoint id
    pub model: String,
    /// Base URL of the fal endpoint
    pub base_url: String,
    /// Response field returned per image; empty keeps the whole body
    #[serde(default)]
    pub output_field: String,
    /// Deadline for each image call
    pub timeout_secs: u64,
}

/// Pipeline limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Maximum segment prompts per request
    pub max_segments: usize,
    /// Failure handling for the image fan-out
    #[serde(default)]
    pub fan_out_policy: FanOutPolicy,
}

/// Provider credentials captured from the environment.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Gemini API key
    pub gemini_api_key: Option<String>,
    /// fal.ai API key
    pub fal_key: Option<String>,
}

impl Credentials {
    /// Read credentials from `GEMINI_API_KEY` and `FAL_KEY`.
    ///
    /// Empty values count as missing.
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: non_empty_var(GEMINI_API_KEY_VAR),
            fal_key: non_empty_var(FAL_KEY_VAR),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<redacted>"))
            .field("fal_key", &self.fal_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Complete service configuration.
///
/// # Example
///
/// ```
/// use montage_server::MontageConfig;
///
/// let config = MontageConfig::from_toml("[pipeline]\nmax_segments = 3\n").unwrap();
/// assert_eq!(config.pipeline.max_segments, 3);
/// assert_eq!(config.generation.model, "gemini-2.5-flash");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MontageConfig {
    /// Listener settings
    pub server: ServerConfig,
    /// Text generation settings
    pub generation: GenerationConfig,
    /// Image generation settings
    pub images: ImagesConfig,
    /// Pipeline limits
    pub pipeline: PipelineConfig,
    /// Provider credentials
    #[serde(skip)]
    pub credentials: Credentials,
}

impl MontageConfig {
    /// Load configuration from every layer plus environment credentials.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a source cannot be read or the merged
    /// values do not deserialize.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> MontageResult<Self> {
        debug!("Loading configuration: env > explicit file > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/montage/montage.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("montage").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("MONTAGE")
                .separator("__")
                .try_parsing(true),
        );

        let mut config = Self::build(builder)?;
        config.credentials = Credentials::from_env();
        Ok(config)
    }

    /// Bundled defaults overlaid with a TOML string, without touching the
    /// filesystem or environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the overlay is not valid TOML or the
    /// merged values do not deserialize.
    pub fn from_toml(overlay: &str) -> MontageResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(overlay, FileFormat::Toml));

        Self::build(builder)
    }

    fn build(builder: config::ConfigBuilder<config::builder::DefaultState>) -> MontageResult<Self> {
        let config = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        Ok(config)
    }

    /// Replace the credentials.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Reject values the service cannot run with.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for zero timeouts or a zero segment cap.
    pub fn validate(&self) -> MontageResult<()> {
        if self.generation.timeout_secs == 0 {
            return Err(ConfigError::new("generation.timeout_secs must be greater than 0").into());
        }
        if self.images.timeout_secs == 0 {
            return Err(ConfigError::new("images.timeout_secs must be greater than 0").into());
        }
        if self.pipeline.max_segments == 0 {
            return Err(ConfigError::new("pipeline.max_segments must be at least 1").into());
        }
        if self.images.model.trim().is_empty() {
            return Err(ConfigError::new("images.model must not be empty").into());
        }
        Ok(())
    }

    /// Names of credential variables that were not provided.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.credentials.gemini_api_key.is_none() {
            missing.push(GEMINI_API_KEY_VAR);
        }
        if self.credentials.fal_key.is_none() {
            missing.push(FAL_KEY_VAR);
        }
        missing
    }

    /// Log a warning for each missing credential.
    ///
    /// The service still starts; requests fail until the key is provided.
    pub fn warn_missing_credentials(&self) {
        for var in self.missing_credentials() {
            warn!(variable = var, "Credential not set, montage requests will fail");
        }
    }

    /// Settings for the Gemini text client.
    pub fn gemini_config(&self) -> GeminiConfig {
        let config = GeminiConfig::new(self.generation.model.clone());
        match &self.credentials.gemini_api_key {
            Some(key) => config.with_api_key(key.clone()),
            None => config,
        }
    }

    /// Settings for the fal image client.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the client settings cannot be assembled.
    pub fn fal_config(&self) -> MontageResult<FalConfig> {
        let output_field = Some(self.images.output_field.trim())
            .filter(|field| !field.is_empty())
            .map(str::to_string);

        let config = FalConfigBuilder::default()
            .base_url(self.images.base_url.clone())
            .model(self.images.model.clone())
            .api_key(self.credentials.fal_key.clone())
            .output_field(output_field)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid image settings: {}", e)))?;
        Ok(config)
    }

    /// Settings for the montage pipeline.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the pipeline settings cannot be assembled.
    pub fn pipeline_settings(&self) -> MontageResult<PipelineSettings> {
        let settings = PipelineSettings::builder()
            .max_segments(self.pipeline.max_segments)
            .fan_out_policy(self.pipeline.fan_out_policy)
            .generation_timeout(Duration::from_secs(self.generation.timeout_secs))
            .image_timeout(Duration::from_secs(self.images.timeout_secs))
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid pipeline settings: {}", e)))?;
        Ok(settings)
    }
}
