//! Mock provider implementation for testing.

use super::{FinishReason, ProviderError, ProviderResponse, VisionProvider};
use crate::models::PartImage;
use async_trait::async_trait;
use std::sync::Mutex;

/// What the mock does when asked to analyze.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Answer with this text.
    Respond(String),
    /// Fail with an API error carrying this detail.
    Fail(String),
}

/// One call seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub mime_type: String,
    pub image: Vec<u8>,
}

/// Mock vision provider for testing.
pub struct MockVisionProvider {
    behavior: MockBehavior,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockVisionProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn responding(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Respond(text.into()))
    }

    pub fn failing(detail: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fail(detail.into()))
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl VisionProvider for MockVisionProvider {
    fn model(&self) -> &str {
        "mock"
    }

    async fn analyze(
        &self,
        prompt: &str,
        image: &PartImage,
    ) -> Result<ProviderResponse, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                prompt: prompt.to_string(),
                mime_type: image.mime_type.clone(),
                image: image.data.to_vec(),
            });
        }

        match &self.behavior {
            MockBehavior::Respond(text) => Ok(ProviderResponse {
                text: text.clone(),
                input_tokens: prompt.len() as i32 / 4,
                output_tokens: text.len() as i32 / 4,
                finish_reason: FinishReason::Complete,
            }),
            MockBehavior::Fail(detail) => Err(ProviderError::ApiError(detail.clone())),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        Ok(())
    }
}
