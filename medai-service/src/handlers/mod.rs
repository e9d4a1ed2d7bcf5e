//! HTTP handlers for the medai service.

pub mod chat;
pub mod directory;
pub mod health;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Fallback for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
}
