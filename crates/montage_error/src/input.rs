//! Caller input errors.

/// Invalid or missing request input, detected before any outbound call.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Input Error: {} at line {} in {}", message, line, file)]
pub struct InputError {
    /// Caller-facing description of the problem
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl InputError {
    /// Create a new InputError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
