//! Trait definitions for the montage generation backends.
//!
//! The pipeline is generic over these traits, so any provider (or a test
//! double) can stand in for the text and image services.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ImageGenerator, TextGenerator};
