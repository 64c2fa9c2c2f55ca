//! Runtime checks for the descriptor contract.

use crate::{MIN_DURATION_SECONDS, MIN_SEGMENTS, MontageDescriptor};
use montage_error::{ValidationError, ValidationErrorKind};

impl MontageDescriptor {
    /// Check every invariant the schema promises.
    ///
    /// Reports the first violation found, checking the title, then the
    /// segment count, then each segment in order.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the violated invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use montage_core::{MontageDescriptor, Segment};
    ///
    /// let montage = MontageDescriptor {
    ///     montage_title: "Solo".to_string(),
    ///     voiceover: None,
    ///     segments: vec![Segment::new("a single frame")],
    /// };
    ///
    /// assert!(montage.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.montage_title.trim().is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyTitle));
        }

        if self.segments.len() < MIN_SEGMENTS {
            return Err(ValidationError::new(ValidationErrorKind::TooFewSegments {
                min: MIN_SEGMENTS,
                found: self.segments.len(),
            }));
        }

        for (index, segment) in self.segments.iter().enumerate() {
            if segment.prompt.trim().is_empty() {
                return Err(ValidationError::new(ValidationErrorKind::EmptyPrompt {
                    index,
                }));
            }

            if let Some(value) = segment.duration_estimate_seconds {
                if !value.is_finite() || value < MIN_DURATION_SECONDS {
                    return Err(ValidationError::new(ValidationErrorKind::InvalidDuration {
                        index,
                        value,
                        min: MIN_DURATION_SECONDS,
                    }));
                }
            }
        }

        Ok(())
    }
}
