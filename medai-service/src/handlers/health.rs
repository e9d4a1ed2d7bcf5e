use axum::{extract::State, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

use crate::startup::AppState;

/// Liveness plus model observability. This endpoint never fails.
///
/// `gemini_configured` reflects whether an API key was present at startup,
/// independent of whether any candidate model initialized.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let model = state
        .model
        .as_ref()
        .map(|m| m.name.as_str())
        .unwrap_or("Unknown");

    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "gemini_configured": state.config.gemini.api_key.is_some(),
        "model": model,
    }))
}
