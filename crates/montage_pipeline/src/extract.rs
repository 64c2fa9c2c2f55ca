//! Segment prompt extraction.

use montage_core::MontageDescriptor;

/// Segment prompts in order, truncated to `max_segments`.
///
/// Segments beyond the cap are dropped without being reported to the caller.
///
/// # Examples
///
/// ```
/// use montage_core::{MontageDescriptor, Segment};
/// use montage_pipeline::extract_prompts;
///
/// let montage = MontageDescriptor {
///     montage_title: "Count".to_string(),
///     voiceover: None,
///     segments: (1..=7).map(|n| Segment::new(format!("frame {}", n))).collect(),
/// };
///
/// let prompts = extract_prompts(&montage, 5);
/// assert_eq!(prompts.len(), 5);
/// assert_eq!(prompts[4], "frame 5");
/// ```
pub fn extract_prompts(montage: &MontageDescriptor, max_segments: usize) -> Vec<String> {
    let total = montage.segments.len();
    if total > max_segments {
        tracing::debug!(
            total,
            kept = max_segments,
            "Dropping segments beyond the fan-out cap"
        );
    }

    montage
        .prompts()
        .take(max_segments)
        .map(str::to_owned)
        .collect()
}
