use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::error::{truncate_chars, ApiError};
use crate::models::{ChatRequest, ChatResponse};
use crate::services::prompt;
use crate::services::providers::GenerationParams;
use crate::startup::AppState;

/// Output budget for a single completion.
const MAX_OUTPUT_TOKENS: i32 = 500;
/// Fixed sampling temperature.
const TEMPERATURE: f32 = 0.7;

/// Preflight acknowledgment for `/api/ai-doctor`. Succeeds unconditionally
/// and never touches the model.
pub async fn preflight() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[tracing::instrument(skip(state, payload))]
pub async fn ai_doctor(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) =
        payload.map_err(|_| ApiError::InvalidRequest("No JSON data provided".to_string()))?;

    let message = request.message.trim();
    if message.is_empty() {
        return Err(ApiError::InvalidRequest(
            "Message cannot be empty".to_string(),
        ));
    }

    let Some(model) = state.model.as_ref() else {
        return Err(ApiError::ModelUnavailable);
    };

    let full_prompt = prompt::build_prompt(message);

    tracing::info!(query = %truncate_chars(message, 50), "Processing query");

    let params = GenerationParams {
        temperature: Some(TEMPERATURE),
        max_output_tokens: Some(MAX_OUTPUT_TOKENS),
    };

    let response = model
        .provider
        .generate(&full_prompt, &params)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Gemini API error");
            ApiError::Upstream(e.to_string())
        })?;

    match response.text.filter(|text| !text.is_empty()) {
        Some(text) => {
            tracing::info!("Successfully generated response");
            Ok(Json(ChatResponse {
                success: true,
                response: text,
                timestamp: Utc::now().to_rfc3339(),
            }))
        }
        None => {
            tracing::error!("Model returned empty response");
            Err(ApiError::EmptyResponse)
        }
    }
}
