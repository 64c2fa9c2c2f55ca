//! HTTP API for montage generation.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use montage_error::{InputError, JsonError, MontageError};
use montage_interface::{ImageGenerator, TextGenerator};
use montage_pipeline::{MontagePipeline, TEXT_REQUIRED_MESSAGE};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, instrument};

/// Caller-facing message for unparsable generation output.
pub const INVALID_JSON_MESSAGE: &str = "Generation service returned invalid JSON";

/// Caller-facing message for output that broke the descriptor contract.
pub const INVALID_MONTAGE_MESSAGE: &str = "Generation service returned an invalid montage";

/// Caller-facing message for every other failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// API state shared by all handlers.
pub struct AppState<G: TextGenerator, I: ImageGenerator> {
    pipeline: Arc<MontagePipeline<G, I>>,
}

impl<G: TextGenerator, I: ImageGenerator> AppState<G, I> {
    /// Creates new API state around a pipeline.
    pub fn new(pipeline: MontagePipeline<G, I>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// The shared pipeline.
    pub fn pipeline(&self) -> &MontagePipeline<G, I> {
        &self.pipeline
    }
}

impl<G: TextGenerator, I: ImageGenerator> Clone for AppState<G, I> {
    fn clone(&self) -> Self {
        Self {
            pipeline: Arc::clone(&self.pipeline),
        }
    }
}

/// Creates the montage API router.
///
/// - `POST /api/montage` runs the pipeline for `{ "text": ... }`
/// - `GET /health` reports liveness
pub fn create_router<G, I>(state: AppState<G, I>) -> Router
where
    G: TextGenerator + 'static,
    I: ImageGenerator + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/montage", post(create_montage::<G, I>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Generate a montage from a creative direction.
///
/// The body is read as raw bytes so that a missing or wrong content type gets
/// the same 400 as any other unusable body.
#[instrument(skip(state, body), fields(body_len = body.len()))]
async fn create_montage<G, I>(State(state): State<AppState<G, I>>, body: Bytes) -> Response
where
    G: TextGenerator + 'static,
    I: ImageGenerator + 'static,
{
    match run_montage(&state, &body).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(e) => ApiError(e).into_response(),
    }
}

async fn run_montage<G, I>(state: &AppState<G, I>, body: &[u8]) -> Result<Value, MontageError>
where
    G: TextGenerator,
    I: ImageGenerator,
{
    let text = request_text(body)?;
    let response = state.pipeline.run(&text).await?;

    let payload = serde_json::to_value(&response)
        .map_err(|e| JsonError::new(format!("Failed to serialize montage response: {}", e)))?;
    Ok(payload)
}

/// Pull the `text` field out of a request body.
fn request_text(body: &[u8]) -> Result<String, InputError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|_| InputError::new(TEXT_REQUIRED_MESSAGE))?;

    value
        .get("text")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| InputError::new(TEXT_REQUIRED_MESSAGE))
}

/// A pipeline failure on its way to the caller.
struct ApiError(MontageError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        error!(error = %err, "Montage request failed");

        let (status, message) = if err.is_input_error() {
            (StatusCode::BAD_REQUEST, TEXT_REQUIRED_MESSAGE)
        } else if err.is_invalid_output() {
            (StatusCode::INTERNAL_SERVER_ERROR, INVALID_JSON_MESSAGE)
        } else if err.is_invalid_montage() {
            (StatusCode::INTERNAL_SERVER_ERROR, INVALID_MONTAGE_MESSAGE)
        } else {
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
