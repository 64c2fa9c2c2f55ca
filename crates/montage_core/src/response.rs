//! Response payload types.

use crate::MontageDescriptor;
use serde::{Deserialize, Serialize};

/// Outcome of one image request, positioned by prompt index.
///
/// Serializes untagged: a generated image is the provider's payload as-is,
/// a failure is `{ "index": i, "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageResult {
    /// Request failed (only emitted under the partial fan-out policy)
    Failed {
        /// Position of the prompt in the fan-out
        index: usize,
        /// Why the request failed
        error: String,
    },
    /// Provider output payload
    Generated(serde_json::Value),
}

impl ImageResult {
    /// True if the image request succeeded.
    pub fn is_generated(&self) -> bool {
        matches!(self, ImageResult::Generated(_))
    }
}

/// Final payload returned to the caller.
///
/// # Examples
///
/// ```
/// use montage_core::{ImageResult, MontageDescriptor, MontageResponse, Segment};
/// use serde_json::json;
///
/// let montage = MontageDescriptor {
///     montage_title: "Orbit".to_string(),
///     voiceover: Some("Round and round.".to_string()),
///     segments: vec![Segment::new("earthrise"), Segment::new("station hull")],
/// };
/// let response = MontageResponse::new(
///     montage,
///     vec![ImageResult::Generated(json!({"url": "a.png"}))],
/// );
///
/// let body = serde_json::to_value(&response).unwrap();
/// assert_eq!(body["falOutputs"][0]["url"], "a.png");
/// assert_eq!(body["montage"]["montageTitle"], "Orbit");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct MontageResponse {
    /// The validated descriptor
    montage: MontageDescriptor,
    /// One result per extracted prompt, in prompt order
    fal_outputs: Vec<ImageResult>,
}

impl MontageResponse {
    /// Assemble a response from its parts.
    pub fn new(montage: MontageDescriptor, fal_outputs: Vec<ImageResult>) -> Self {
        Self {
            montage,
            fal_outputs,
        }
    }
}
