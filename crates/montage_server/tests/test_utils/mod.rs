//! Test doubles and request helpers for the HTTP API.

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request};
use http_body_util::BodyExt;
use montage_error::{ConfigError, ImageError, ImageErrorKind, MontageResult};
use montage_interface::{ImageGenerator, TextGenerator};
use montage_pipeline::{MontagePipeline, PipelineSettings};
use montage_server::{AppState, create_router};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Text generator that returns a fixed answer, or a missing-credential error.
#[derive(Debug, Clone)]
pub struct MockText {
    answer: Option<String>,
    calls: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockText {
    pub fn answering(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            answer: None,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl TextGenerator for MockText {
    async fn generate_text(&self, _prompt: &str) -> MontageResult<String> {
        *self.calls.lock().unwrap() += 1;
        match &self.answer {
            Some(answer) => Ok(answer.clone()),
            None => Err(ConfigError::new("GEMINI_API_KEY is not configured").into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-text"
    }

    fn model_name(&self) -> &str {
        "mock-text-model"
    }
}

/// Image generator that answers `{ "url": "<prompt>.png" }` unless told to fail.
#[derive(Debug, Clone, Default)]
pub struct MockImages {
    fail: bool,
    calls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockImages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ImageGenerator for MockImages {
    async fn generate_image(&self, prompt: &str) -> MontageResult<Value> {
        self.calls.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(ImageError::new(ImageErrorKind::HttpError {
                status_code: 502,
                message: "upstream unavailable".to_string(),
            })
            .into());
        }
        Ok(json!({ "url": format!("{}.png", prompt) }))
    }

    fn provider_name(&self) -> &'static str {
        "mock-image"
    }

    fn model_name(&self) -> &str {
        "mock-image-model"
    }
}

/// Router over the given mocks with default settings.
pub fn router(text: MockText, images: MockImages) -> Router {
    create_router(AppState::new(MontagePipeline::new(
        text,
        images,
        PipelineSettings::default(),
    )))
}

/// POST a raw body to `/api/montage`; returns status and parsed JSON body.
pub async fn post_montage(app: Router, body: impl Into<Body>) -> (u16, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/montage")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();

    send(app, request).await
}

/// Send a request and parse the JSON response body.
pub async fn send(app: Router, request: Request<Body>) -> (u16, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Descriptor JSON with `count` segments prompted "shot 1", "shot 2", ...
#[allow(dead_code)]
pub fn montage_json(count: usize) -> String {
    let segments: Vec<Value> = (1..=count)
        .map(|n| {
            json!({
                "segmentTitle": format!("Beat {}", n),
                "prompt": format!("shot {}", n),
                "durationEstimateSeconds": 2.0
            })
        })
        .collect();

    json!({ "montageTitle": "City at night", "segments": segments }).to_string()
}
