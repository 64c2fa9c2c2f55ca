//! Provider clients for the montage service.
//!
//! - [`GeminiClient`] implements [`montage_interface::TextGenerator`] on top of
//!   the Google Gemini REST API.
//! - [`FalClient`] implements [`montage_interface::ImageGenerator`] against a
//!   fal.ai model endpoint.
//!
//! Both clients take their credentials from configuration at construction
//! time. A missing credential does not fail construction; it fails each call
//! with a [`montage_error::ConfigError`].
//!
//! # Example
//!
//! ```no_run
//! use montage_models::{GeminiClient, GeminiConfig};
//! use montage_interface::TextGenerator;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeminiConfig::new("gemini-2.5-flash")
//!     .with_api_key(std::env::var("GEMINI_API_KEY")?);
//! let client = GeminiClient::new(config)?;
//! let text = client.generate_text("Say hello as JSON").await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fal;
mod gemini;

pub use fal::{FalClient, FalConfig, FalConfigBuilder};
pub use gemini::{GeminiClient, GeminiConfig};
