//! Mock provider implementations for testing.

use super::{GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;

enum MockReply {
    Echo,
    Empty,
    Fail(String),
}

/// Scripted text provider for exercising the completion path without the
/// real API.
pub struct MockTextProvider {
    reply: MockReply,
}

impl MockTextProvider {
    /// Provider that answers every prompt.
    pub fn replying() -> Self {
        Self {
            reply: MockReply::Echo,
        }
    }

    /// Provider whose calls succeed but carry no text payload.
    pub fn empty() -> Self {
        Self {
            reply: MockReply::Empty,
        }
    }

    /// Provider whose calls fail with the given error text.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: MockReply::Fail(message.into()),
        }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        match &self.reply {
            MockReply::Echo => Ok(ProviderResponse {
                text: Some(format!("Mock response for: {}", prompt)),
            }),
            MockReply::Empty => Ok(ProviderResponse { text: None }),
            MockReply::Fail(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }
}
