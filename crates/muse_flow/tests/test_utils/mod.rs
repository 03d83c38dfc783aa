//! Test utilities for Muse flow tests.
//!
//! Provides a deterministic mock driver with canned responses and call
//! counting, so invocation behavior can be validated without network
//! access.

use muse_core::{MediaSource, ModelRequest, ModelResponse, Output};
use muse_error::{GeminiError, GeminiErrorKind, MuseResult};
use muse_interface::{ImageGeneration, ModelDriver};
use std::sync::{Arc, Mutex};

/// What the mock returns on every call.
#[derive(Debug)]
pub enum MockBehavior {
    /// Return this text payload
    Text(String),
    /// Return this media payload from image generation
    Image(MediaSource),
    /// Fail with a provider error carrying this message
    Error(String),
}

/// Deterministic stand-in for a model driver.
///
/// Clones share the same prompt log, so tests can keep a handle for
/// assertions while the invoker owns another.
#[derive(Debug, Clone)]
pub struct MockDriver {
    behavior: Arc<MockBehavior>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockDriver {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Text(text.into()))
    }

    pub fn with_image(source: MediaSource) -> Self {
        Self::new(MockBehavior::Image(source))
    }

    pub fn with_error(message: impl Into<String>) -> Self {
        Self::new(MockBehavior::Error(message.into()))
    }

    fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior: Arc::new(behavior),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of driver calls made so far, text and image combined.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// The prompt of the most recent call, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }

    fn record_call(&self, prompt: &str) {
        self.prompts.lock().unwrap().push(prompt.to_string());
    }
}

#[async_trait::async_trait]
impl ModelDriver for MockDriver {
    async fn generate(&self, req: &ModelRequest) -> MuseResult<ModelResponse> {
        self.record_call(&req.prompt);
        match self.behavior.as_ref() {
            MockBehavior::Text(text) => Ok(ModelResponse {
                outputs: vec![Output::Text(text.clone())],
            }),
            MockBehavior::Image(_) => Ok(ModelResponse { outputs: vec![] }),
            MockBehavior::Error(message) => {
                Err(GeminiError::new(GeminiErrorKind::ApiRequest(message.clone())).into())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

#[async_trait::async_trait]
impl ImageGeneration for MockDriver {
    async fn generate_image(&self, prompt: &str) -> MuseResult<MediaSource> {
        self.record_call(prompt);
        match self.behavior.as_ref() {
            MockBehavior::Image(source) => Ok(source.clone()),
            MockBehavior::Text(text) => Ok(MediaSource::Base64(text.clone())),
            MockBehavior::Error(message) => {
                Err(GeminiError::new(GeminiErrorKind::ApiRequest(message.clone())).into())
            }
        }
    }
}
