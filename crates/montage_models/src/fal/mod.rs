//! fal.ai image generation.

mod client;
mod config;

pub use client::FalClient;
pub use config::{FalConfig, FalConfigBuilder};
