//! HTTP service for montage generation.
//!
//! Wires configuration, logging, the provider clients and the
//! [`montage_pipeline::MontagePipeline`] behind an axum router:
//!
//! - [`MontageConfig`] layers bundled defaults, config files and environment
//! - [`init_observability`] installs the tracing subscriber
//! - [`create_router`] exposes `POST /api/montage` and `GET /health`
//!
//! The `montage-server` binary puts these together.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod api;
mod config;
mod observability;

pub use api::{
    AppState, INTERNAL_ERROR_MESSAGE, INVALID_JSON_MESSAGE, INVALID_MONTAGE_MESSAGE, create_router,
};
pub use config::{
    Credentials, FAL_KEY_VAR, GEMINI_API_KEY_VAR, GenerationConfig, ImagesConfig, MontageConfig,
    PipelineConfig, ServerConfig,
};
pub use observability::{ObservabilityConfig, init_observability};
