//! End-to-end montage generation.

use crate::{PipelineSettings, PipelineStage, build_prompt, extract_prompts, fan_out, parse_montage};
use montage_core::MontageResponse;
use montage_error::{GenerationError, GenerationErrorKind, InputError, MontageResult};
use montage_interface::{ImageGenerator, TextGenerator};
use tracing::{debug, info, instrument, warn};

/// Caller-facing message for missing or empty input text.
pub const TEXT_REQUIRED_MESSAGE: &str = "`text` field is required";

/// Orchestrates prompt building, generation, validation, extraction, image
/// fan-out, and aggregation for one request at a time.
///
/// A pipeline holds no per-request state; concurrent runs share only the
/// immutable backends and settings.
pub struct MontagePipeline<G: TextGenerator, I: ImageGenerator> {
    text: G,
    images: I,
    settings: PipelineSettings,
}

impl<G: TextGenerator, I: ImageGenerator> MontagePipeline<G, I> {
    /// Create a pipeline over the given backends.
    pub fn new(text: G, images: I, settings: PipelineSettings) -> Self {
        Self {
            text,
            images,
            settings,
        }
    }

    /// The text generation backend.
    pub fn text_generator(&self) -> &G {
        &self.text
    }

    /// The image generation backend.
    pub fn image_generator(&self) -> &I {
        &self.images
    }

    /// The pipeline settings.
    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Turn a creative direction into a fully resolved montage response.
    ///
    /// # Errors
    ///
    /// Fails before any outbound call with an input error for blank text or a
    /// configuration error when either backend is missing its credential.
    /// Later failures are a generation error, a validation error for
    /// unusable output, or an image error when the fan-out policy rejects
    /// failed image requests.
    #[instrument(
        skip(self, text),
        fields(
            text_len = text.len(),
            text_model = self.text.model_name(),
            image_model = self.images.model_name()
        )
    )]
    pub async fn run(&self, text: &str) -> MontageResult<MontageResponse> {
        let mut stage = PipelineStage::Received;
        debug!(stage = %stage, "Montage request received");

        match self.run_stages(text, &mut stage).await {
            Ok(response) => {
                info!(
                    stage = %PipelineStage::Completed,
                    segments = response.montage().segments.len(),
                    images = response.fal_outputs().len(),
                    "Montage generated"
                );
                Ok(response)
            }
            Err(e) => {
                warn!(
                    stage = %PipelineStage::Failed,
                    failed_at = %stage,
                    error = %e,
                    "Montage generation failed"
                );
                Err(e)
            }
        }
    }

    async fn run_stages(
        &self,
        text: &str,
        stage: &mut PipelineStage,
    ) -> MontageResult<MontageResponse> {
        if text.trim().is_empty() {
            return Err(InputError::new(TEXT_REQUIRED_MESSAGE).into());
        }

        self.text.ensure_configured()?;
        self.images.ensure_configured()?;

        advance(stage, PipelineStage::Prompting);
        let prompt = build_prompt(text);

        advance(stage, PipelineStage::Generating);
        let raw = self.generate(&prompt).await?;

        advance(stage, PipelineStage::Validating);
        let montage = parse_montage(&raw)?;

        advance(stage, PipelineStage::Extracting);
        let prompts = extract_prompts(&montage, *self.settings.max_segments());

        advance(stage, PipelineStage::FanningOut);
        let outputs = fan_out(
            &self.images,
            &prompts,
            *self.settings.image_timeout(),
            *self.settings.fan_out_policy(),
        )
        .await?;

        advance(stage, PipelineStage::Aggregating);
        Ok(MontageResponse::new(montage, outputs))
    }

    /// Call the text service under the generation deadline.
    async fn generate(&self, prompt: &str) -> MontageResult<String> {
        let deadline = *self.settings.generation_timeout();

        let raw = tokio::time::timeout(deadline, self.text.generate_text(prompt))
            .await
            .map_err(|_| GenerationError::new(GenerationErrorKind::Timeout(deadline)))??;

        Ok(raw.trim().to_string())
    }
}

fn advance(stage: &mut PipelineStage, next: PipelineStage) {
    debug!(from = %stage, stage = %next, "Pipeline stage transition");
    *stage = next;
}
