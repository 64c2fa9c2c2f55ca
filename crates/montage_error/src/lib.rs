//! Error types for the montage generation service.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! [`MontageError`] unifies every concern so `?` works across crate boundaries.
//!
//! # Examples
//!
//! ```
//! use montage_error::{InputError, MontageResult};
//!
//! fn read_text(text: Option<&str>) -> MontageResult<String> {
//!     match text {
//!         Some(t) if !t.trim().is_empty() => Ok(t.to_string()),
//!         _ => Err(InputError::new("`text` field is required"))?,
//!     }
//! }
//!
//! assert!(read_text(None).unwrap_err().is_input_error());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod http;
mod image;
mod input;
mod json;
mod validation;

pub use config::ConfigError;
pub use error::{MontageError, MontageErrorKind, MontageResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use http::HttpError;
pub use image::{ImageError, ImageErrorKind, ImageFailure};
pub use input::InputError;
pub use json::JsonError;
pub use validation::{ValidationError, ValidationErrorKind};
