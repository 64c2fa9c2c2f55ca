//! Pipeline tuning knobs.

use crate::FanOutPolicy;
use std::time::Duration;

/// Limits and policies for one [`crate::MontagePipeline`].
///
/// # Examples
///
/// ```
/// use montage_pipeline::{FanOutPolicy, PipelineSettings};
/// use std::time::Duration;
///
/// let settings = PipelineSettings::builder()
///     .max_segments(3_usize)
///     .fan_out_policy(FanOutPolicy::Partial)
///     .image_timeout(Duration::from_secs(30))
///     .build()
///     .unwrap();
///
/// assert_eq!(*settings.max_segments(), 3);
/// assert_eq!(*settings.generation_timeout(), Duration::from_secs(60));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into))]
pub struct PipelineSettings {
    /// Maximum number of segment prompts sent to the image service
    #[builder(default = "5")]
    max_segments: usize,
    /// What to do when some image requests fail
    #[builder(default)]
    fan_out_policy: FanOutPolicy,
    /// Deadline for the text generation call
    #[builder(default = "Duration::from_secs(60)")]
    generation_timeout: Duration,
    /// Deadline for each image call
    #[builder(default = "Duration::from_secs(120)")]
    image_timeout: Duration,
}

impl PipelineSettings {
    /// Creates a new settings builder.
    pub fn builder() -> PipelineSettingsBuilder {
        PipelineSettingsBuilder::default()
    }
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            max_segments: 5,
            fan_out_policy: FanOutPolicy::default(),
            generation_timeout: Duration::from_secs(60),
            image_timeout: Duration::from_secs(120),
        }
    }
}
