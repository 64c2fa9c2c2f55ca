//! Core data types for the montage generation service.
//!
//! This crate holds the montage descriptor model, the schema that is embedded
//! in generation prompts, and the rules used to validate generated output.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod descriptor;
mod response;
mod schema;
mod validate;

pub use descriptor::{MontageDescriptor, Segment, SegmentBuilder, SegmentBuilderError};
pub use response::{ImageResult, MontageResponse};
pub use schema::{MIN_DURATION_SECONDS, MIN_SEGMENTS, montage_schema};
