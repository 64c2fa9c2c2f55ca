//! Montage descriptor types.

use serde::{Deserialize, Serialize};

/// Structured description of a montage, as produced by the generation service.
///
/// Field names serialize in camelCase (`montageTitle`, `segments`, ...) to match
/// the schema embedded in the generation prompt.
///
/// # Examples
///
/// ```
/// use montage_core::{MontageDescriptor, Segment};
///
/// let montage = MontageDescriptor {
///     montage_title: "Harbor at dawn".to_string(),
///     voiceover: None,
///     segments: vec![
///         Segment::new("fog rolling over the pier"),
///         Segment::new("gulls lifting off the water"),
///     ],
/// };
///
/// assert_eq!(montage.prompts().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MontageDescriptor {
    /// Title of the whole montage
    pub montage_title: String,
    /// Narration spanning the whole montage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voiceover: Option<String>,
    /// Ordered visual beats
    pub segments: Vec<Segment>,
}

impl MontageDescriptor {
    /// Segment prompts in segment order.
    pub fn prompts(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|segment| segment.prompt.as_str())
    }
}

/// One visual beat of a montage.
///
/// Only `prompt` is consumed downstream; the other fields are carried through
/// to the response untouched.
///
/// # Examples
///
/// ```
/// use montage_core::SegmentBuilder;
///
/// let segment = SegmentBuilder::default()
///     .prompt("neon rain on a tram window")
///     .segment_title("Commute")
///     .duration_estimate_seconds(2.5)
///     .build()
///     .unwrap();
///
/// assert_eq!(segment.duration_estimate_seconds, Some(2.5));
/// assert!(segment.on_screen_text.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct Segment {
    /// Short label for the beat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub segment_title: Option<String>,
    /// Image generation prompt for the beat
    pub prompt: String,
    /// Estimated on-screen duration in seconds (at least 0.1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub duration_estimate_seconds: Option<f64>,
    /// Caption shown over the beat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    pub on_screen_text: Option<String>,
}

impl Segment {
    /// Create a segment carrying only a prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            segment_title: None,
            prompt: prompt.into(),
            duration_estimate_seconds: None,
            on_screen_text: None,
        }
    }
}
