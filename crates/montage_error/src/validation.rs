//! Errors for model output that cannot be used as a montage descriptor.

/// Reasons a generated descriptor was rejected.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Output is not parseable JSON at all
    #[display("Invalid generation output: {}", _0)]
    InvalidJson(String),
    /// Output is JSON but does not have the descriptor's shape
    #[display("Output does not match the montage schema: {}", _0)]
    Shape(String),
    /// `montageTitle` is empty or whitespace
    #[display("montageTitle must not be empty")]
    EmptyTitle,
    /// Fewer segments than the schema requires
    #[display("Expected at least {} segments, found {}", min, found)]
    TooFewSegments {
        /// Minimum segment count
        min: usize,
        /// Number of segments returned
        found: usize,
    },
    /// A segment's `prompt` is empty or whitespace
    #[display("Segment {} has an empty prompt", index)]
    EmptyPrompt {
        /// Zero-based segment index
        index: usize,
    },
    /// A segment's `durationEstimateSeconds` is below the minimum or not finite
    #[display("Segment {} has durationEstimateSeconds {}, minimum is {}", index, value, min)]
    InvalidDuration {
        /// Zero-based segment index
        index: usize,
        /// Value returned by the model
        value: f64,
        /// Minimum accepted value
        min: f64,
    },
}

/// Validation error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use montage_error::{ValidationError, ValidationErrorKind};
    ///
    /// let err = ValidationError::new(ValidationErrorKind::TooFewSegments { min: 2, found: 1 });
    /// assert!(format!("{}", err).contains("at least 2 segments, found 1"));
    /// ```
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when the output could not be parsed as JSON.
    pub fn is_invalid_json(&self) -> bool {
        matches!(self.kind, ValidationErrorKind::InvalidJson(_))
    }
}
