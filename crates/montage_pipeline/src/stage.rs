//! Request lifecycle stages.

/// Stage of a single pipeline run.
///
/// Runs move forward through the stages in declaration order and end in
/// either `Completed` or `Failed`. There is no retry transition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum PipelineStage {
    /// Input accepted, nothing done yet
    Received,
    /// Building the generation prompt
    Prompting,
    /// Waiting on the text generation service
    Generating,
    /// Parsing and validating generated output
    Validating,
    /// Selecting segment prompts
    Extracting,
    /// Waiting on image requests
    FanningOut,
    /// Assembling the response
    Aggregating,
    /// Response ready
    Completed,
    /// Run aborted
    Failed,
}

impl PipelineStage {
    /// True for `Completed` and `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineStage::Completed | PipelineStage::Failed)
    }
}
