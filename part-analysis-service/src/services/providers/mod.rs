//! Multimodal provider abstraction.
//!
//! The analyze handler only sees [`VisionProvider`], so the Gemini backend
//! and the in-tree mock are interchangeable.

pub mod gemini;
pub mod mock;

use crate::models::PartImage;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered: {0}")]
    ContentFiltered(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

impl ProviderError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::ApiError(_) => "api_error",
            ProviderError::RateLimited => "rate_limited",
            ProviderError::ContentFiltered(_) => "content_filtered",
            ProviderError::NetworkError(_) => "network_error",
        }
    }
}

/// Result of a provider call.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Generated text, exactly as the provider returned it.
    pub text: String,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,

    /// Finish reason.
    pub finish_reason: FinishReason,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    Other,
}

impl FinishReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinishReason::Complete => "complete",
            FinishReason::Length => "length",
            FinishReason::Other => "other",
        }
    }
}

/// A provider that answers a text prompt about one image.
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Model identifier, for logs and metrics.
    fn model(&self) -> &str;

    /// Send the prompt and the image in a single request.
    async fn analyze(
        &self,
        prompt: &str,
        image: &PartImage,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Local readiness check. Makes no network call.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
