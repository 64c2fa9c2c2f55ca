//! Top-level error wrapper types.

use crate::{
    ConfigError, GenerationError, HttpError, ImageError, InputError, JsonError, ValidationError,
};

/// Every error condition the service can produce.
///
/// # Examples
///
/// ```
/// use montage_error::{MontageError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: MontageError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MontageErrorKind {
    /// Missing or invalid request input
    #[from(InputError)]
    Input(InputError),
    /// Configuration or credential error
    #[from(ConfigError)]
    Config(ConfigError),
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Upstream text generation failure
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Generated descriptor was unparsable or violated the schema
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Upstream image generation failure
    #[from(ImageError)]
    Image(ImageError),
}

/// Montage error with kind discrimination.
///
/// # Examples
///
/// ```
/// use montage_error::{ConfigError, MontageResult};
///
/// fn might_fail() -> MontageResult<()> {
///     Err(ConfigError::new("FAL_KEY is not set"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Montage Error: {}", _0)]
pub struct MontageError(Box<MontageErrorKind>);

impl MontageError {
    /// Create a new error from a kind.
    pub fn new(kind: MontageErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MontageErrorKind {
        &self.0
    }

    /// True for caller-caused input errors.
    pub fn is_input_error(&self) -> bool {
        matches!(self.kind(), MontageErrorKind::Input(_))
    }

    /// True when the generation service produced output that is not JSON.
    pub fn is_invalid_output(&self) -> bool {
        matches!(self.kind(), MontageErrorKind::Validation(e) if e.is_invalid_json())
    }

    /// True when the output parsed but broke the descriptor contract.
    pub fn is_invalid_montage(&self) -> bool {
        matches!(self.kind(), MontageErrorKind::Validation(e) if !e.is_invalid_json())
    }
}

// Generic From implementation for any type that converts to MontageErrorKind
impl<T> From<T> for MontageError
where
    T: Into<MontageErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for montage operations.
pub type MontageResult<T> = std::result::Result<T, MontageError>;
