//! The montage descriptor contract embedded in generation prompts.

use serde_json::{Value, json};

/// Minimum number of segments in a montage.
pub const MIN_SEGMENTS: usize = 2;

/// Minimum value of `durationEstimateSeconds` when present.
pub const MIN_DURATION_SECONDS: f64 = 0.1;

/// JSON Schema describing a valid [`crate::MontageDescriptor`].
///
/// The same bounds are enforced at runtime by
/// [`crate::MontageDescriptor::validate`].
///
/// # Examples
///
/// ```
/// use montage_core::montage_schema;
///
/// let schema = montage_schema();
/// assert_eq!(schema["properties"]["segments"]["minItems"], 2);
/// assert_eq!(schema["required"][0], "montageTitle");
/// ```
pub fn montage_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "montageTitle": { "type": "string", "minLength": 1 },
            "voiceover": { "type": "string" },
            "segments": {
                "type": "array",
                "minItems": MIN_SEGMENTS,
                "items": {
                    "type": "object",
                    "properties": {
                        "segmentTitle": { "type": "string" },
                        "prompt": { "type": "string", "minLength": 1 },
                        "durationEstimateSeconds": {
                            "type": "number",
                            "minimum": MIN_DURATION_SECONDS
                        },
                        "onScreenText": { "type": "string" }
                    },
                    "required": ["prompt"]
                }
            }
        },
        "required": ["montageTitle", "segments"]
    })
}
