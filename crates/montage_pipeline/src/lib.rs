//! Montage generation pipeline.
//!
//! Turns a free-form creative direction into a [`MontageResponse`]:
//!
//! 1. [`build_prompt`] embeds the descriptor schema and the caller's text
//! 2. the [`TextGenerator`] returns raw model output
//! 3. [`parse_montage`] parses and validates it into a descriptor
//! 4. [`extract_prompts`] takes at most `max_segments` segment prompts
//! 5. [`fan_out`] runs one image request per prompt concurrently
//! 6. the descriptor and image results are assembled into the response
//!
//! [`MontagePipeline`] drives the stages and owns the per-call deadlines.
//!
//! # Example
//!
//! ```rust,ignore
//! use montage_models::{FalClient, GeminiClient};
//! use montage_pipeline::{MontagePipeline, PipelineSettings};
//!
//! # async fn example(gemini: GeminiClient, fal: FalClient) -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = MontagePipeline::new(gemini, fal, PipelineSettings::default());
//! let response = pipeline.run("a quiet city waking up").await?;
//! println!("{} images", response.fal_outputs().len());
//! # Ok(())
//! # }
//! ```
//!
//! [`MontageResponse`]: montage_core::MontageResponse
//! [`TextGenerator`]: montage_interface::TextGenerator

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extract;
mod fan_out;
mod pipeline;
mod prompt;
mod settings;
mod stage;
mod validator;

pub use extract::extract_prompts;
pub use fan_out::{FanOutPolicy, fan_out};
pub use pipeline::{MontagePipeline, TEXT_REQUIRED_MESSAGE};
pub use prompt::build_prompt;
pub use settings::{PipelineSettings, PipelineSettingsBuilder};
pub use stage::PipelineStage;
pub use validator::parse_montage;
