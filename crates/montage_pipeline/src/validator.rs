//! Parsing and validation of raw generation output.

use montage_core::MontageDescriptor;
use montage_error::{ValidationError, ValidationErrorKind};
use serde_json::Value;

/// Parse raw model output into a validated [`MontageDescriptor`].
///
/// The text must be a JSON document on its own: code fences or surrounding
/// prose are rejected, not stripped.
///
/// # Errors
///
/// - [`ValidationErrorKind::InvalidJson`] when the text is not JSON
/// - [`ValidationErrorKind::Shape`] when the JSON does not fit the descriptor
/// - any invariant violation reported by [`MontageDescriptor::validate`]
///
/// # Examples
///
/// ```
/// use montage_pipeline::parse_montage;
///
/// let raw = r#"{"montageTitle": "Tides", "segments": [{"prompt": "low tide"}, {"prompt": "high tide"}]}"#;
/// let montage = parse_montage(raw).unwrap();
/// assert_eq!(montage.segments.len(), 2);
///
/// assert!(parse_montage("not json").unwrap_err().is_invalid_json());
/// ```
pub fn parse_montage(raw: &str) -> Result<MontageDescriptor, ValidationError> {
    let value: Value = serde_json::from_str(raw).map_err(|e| {
        let preview = raw.chars().take(100).collect::<String>();

        tracing::error!(
            error = %e,
            output_preview = %preview,
            "Generation output is not valid JSON"
        );

        ValidationError::new(ValidationErrorKind::InvalidJson(e.to_string()))
    })?;

    let montage: MontageDescriptor = serde_json::from_value(value).map_err(|e| {
        tracing::error!(error = %e, "Generation output does not match the montage schema");
        ValidationError::new(ValidationErrorKind::Shape(e.to_string()))
    })?;

    montage.validate().inspect_err(|e| {
        tracing::error!(error = %e, "Generated montage violates the schema contract");
    })?;

    Ok(montage)
}
