//! Startup model selection.
//!
//! The service walks a fixed ordered list of Gemini model identifiers and
//! keeps the first one that answers a metadata probe. The choice is made
//! once per process lifetime and never revisited.

use std::sync::Arc;

use crate::error::truncate_chars;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;

/// Candidate model identifiers, most capable first.
pub const CANDIDATE_MODELS: [&str; 4] = [
    "gemini-2.0-flash-exp",
    "gemini-1.5-pro",
    "gemini-1.5-flash",
    "gemini-pro",
];

/// The model handle selected at startup: the winning identifier plus the
/// provider bound to it. Written exactly once, read-only afterwards, shared
/// through `AppState`.
#[derive(Clone)]
pub struct ActiveModel {
    pub name: String,
    pub provider: Arc<dyn TextProvider>,
}

/// Try each candidate in order and return the first one that verifies.
///
/// Failures are logged truncated and skipped. `None` means every candidate
/// failed; the completion endpoint then stays disabled for the process
/// lifetime while the static endpoints keep serving.
pub async fn select_model(api_key: &str) -> Option<ActiveModel> {
    for name in CANDIDATE_MODELS {
        tracing::info!(model = %name, "Trying model");

        let provider = GeminiTextProvider::new(GeminiConfig {
            api_key: api_key.to_string(),
            model: name.to_string(),
        });

        match provider.verify().await {
            Ok(()) => {
                tracing::info!(model = %name, "Successfully initialized model");
                return Some(ActiveModel {
                    name: name.to_string(),
                    provider: Arc::new(provider),
                });
            }
            Err(e) => {
                tracing::warn!(
                    model = %name,
                    error = %truncate_chars(&e.to_string(), 100),
                    "Model not available"
                );
            }
        }
    }

    tracing::error!("No available models found");
    None
}
