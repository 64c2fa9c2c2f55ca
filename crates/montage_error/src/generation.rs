//! Text generation (LLM) error types.

use std::time::Duration;

/// Text generation failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Failed to create the provider client
    #[display("Failed to create generation client: {}", _0)]
    ClientCreation(String),
    /// API request failed
    #[display("Generation API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The call did not finish before its deadline
    #[display("Generation request timed out after {:?}", _0)]
    Timeout(Duration),
}

/// Text generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use montage_error::{GenerationError, GenerationErrorKind};
/// use std::time::Duration;
///
/// let err = GenerationError::new(GenerationErrorKind::Timeout(Duration::from_secs(30)));
/// assert!(format!("{}", err).contains("timed out after 30s"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
