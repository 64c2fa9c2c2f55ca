//! Test doubles for the generation backends.

use async_trait::async_trait;
use montage_error::{GenerationError, GenerationErrorKind, ImageError, ImageErrorKind, MontageResult};
use montage_interface::{ImageGenerator, TextGenerator};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Behavior configuration for the mock text generator.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum MockBehavior {
    /// Always return the given text
    Success(String),
    /// Always fail with the given error
    Error(GenerationErrorKind),
    /// Never answer
    Hang,
}

/// Mock text generator that records every prompt it receives.
#[derive(Debug, Clone)]
pub struct MockTextGenerator {
    behavior: MockBehavior,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockTextGenerator {
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    pub fn new_error(error: GenerationErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    pub fn new_hanging() -> Self {
        Self::new_with_behavior(MockBehavior::Hang)
    }

    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate_text(&self, prompt: &str) -> MontageResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.behavior {
            MockBehavior::Success(text) => Ok(text.clone()),
            MockBehavior::Error(kind) => Err(GenerationError::new(kind.clone()).into()),
            MockBehavior::Hang => std::future::pending().await,
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-text"
    }

    fn model_name(&self) -> &str {
        "mock-text-model"
    }
}

/// Mock image generator with per-prompt delays and failures.
///
/// Successful calls answer `{ "prompt": <prompt> }` so tests can match
/// outputs back to their prompts.
#[derive(Debug, Clone, Default)]
pub struct MockImageGenerator {
    failing: Arc<Mutex<Vec<String>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    calls: Arc<Mutex<Vec<String>>>,
    completed: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockImageGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every request for this prompt with an HTTP 500.
    pub fn fail_on(self, prompt: impl Into<String>) -> Self {
        self.failing.lock().unwrap().push(prompt.into());
        self
    }

    /// Delay the answer for this prompt.
    pub fn delay(self, prompt: impl Into<String>, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(prompt.into(), delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Prompts in the order their requests finished successfully.
    pub fn completion_order(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate_image(&self, prompt: &str) -> MontageResult<Value> {
        self.calls.lock().unwrap().push(prompt.to_string());

        let delay = self.delays.lock().unwrap().get(prompt).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.lock().unwrap().iter().any(|p| p == prompt) {
            return Err(ImageError::new(ImageErrorKind::HttpError {
                status_code: 500,
                message: format!("mock failure for {}", prompt),
            })
            .into());
        }

        self.completed.lock().unwrap().push(prompt.to_string());
        Ok(json!({ "prompt": prompt }))
    }

    fn provider_name(&self) -> &'static str {
        "mock-image"
    }

    fn model_name(&self) -> &str {
        "mock-image-model"
    }
}

/// JSON for a descriptor with `count` segments prompted "shot 1", "shot 2", ...
#[allow(dead_code)]
pub fn montage_json(count: usize) -> String {
    let segments: Vec<Value> = (1..=count)
        .map(|n| json!({ "segmentTitle": format!("Beat {}", n), "prompt": format!("shot {}", n) }))
        .collect();

    json!({
        "montageTitle": "Test montage",
        "voiceover": "Narration",
        "segments": segments
    })
    .to_string()
}
