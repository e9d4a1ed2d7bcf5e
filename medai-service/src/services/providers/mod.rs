//! AI provider abstraction.
//!
//! A trait seam between the HTTP handlers and the generative backend, so the
//! completion path can be exercised with mocks in tests.

pub mod gemini;
pub mod mock;

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

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a completion call.
#[derive(Debug)]
pub struct ProviderResponse {
    /// Generated text; `None` when the model produced no usable content.
    pub text: Option<String>,
}

/// Generation parameters for a completion call.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Maximum output tokens.
    pub max_output_tokens: Option<i32>,
}

/// A text-generation backend (Gemini in production, mocks in tests).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// One blocking completion round trip. No retries, no cancellation.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;
}
