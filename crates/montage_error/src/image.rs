//! Image generation error types.

use std::time::Duration;

/// One failed request within an image fan-out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("[{}] {}", index, reason)]
pub struct ImageFailure {
    /// Position of the prompt in the fan-out
    pub index: usize,
    /// Why the request failed
    pub reason: String,
}

/// Image generation failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ImageErrorKind {
    /// API request failed
    #[display("Image API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body could not be decoded
    #[display("Failed to decode image response: {}", _0)]
    Deserialization(String),
    /// The call did not finish before its deadline
    #[display("Image request timed out after {:?}", _0)]
    Timeout(Duration),
    /// One or more requests of a fan-out failed
    #[display(
        "{} of {} image requests failed: {}",
        failures.len(),
        total,
        failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    FanOut {
        /// Every failed request, in prompt order
        failures: Vec<ImageFailure>,
        /// Number of requests issued
        total: usize,
    },
}

/// Image generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use montage_error::{ImageError, ImageErrorKind, ImageFailure};
///
/// let err = ImageError::new(ImageErrorKind::FanOut {
///     failures: vec![ImageFailure { index: 2, reason: "HTTP 503".to_string() }],
///     total: 5,
/// });
/// assert!(format!("{}", err).contains("1 of 5 image requests failed: [2] HTTP 503"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The kind of error that occurred
    pub kind: ImageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImageError {
    /// Create a new ImageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
