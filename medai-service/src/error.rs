//! Request-level errors and panic boundaries for the HTTP surface.
//!
//! Each variant maps to the exact JSON envelope and status code the endpoint
//! contract promises. At most a 100-character excerpt of upstream or panic
//! text ever reaches a client; the full detail stays in the server logs.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("AI model not initialized. Check your API key and try restarting.")]
    ModelUnavailable,

    #[error("API Error: {0}")]
    Upstream(String),

    #[error("AI model returned empty response. Try again.")]
    EmptyResponse,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    success: Option<bool>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, success) = match self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::ModelUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "AI model not initialized. Check your API key and try restarting.".to_string(),
                Some(false),
            ),
            ApiError::Upstream(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("API Error: {}", truncate_chars(&detail, 100)),
                Some(false),
            ),
            ApiError::EmptyResponse => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "AI model returned empty response. Try again.".to_string(),
                Some(false),
            ),
        };

        (status, Json(ErrorBody { error, success })).into_response()
    }
}

/// Panic boundary for the completion route: reported with that endpoint's
/// envelope, detail truncated like any other upstream excerpt.
pub fn chat_panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic_message(err.as_ref());
    tracing::error!(error = %detail, "Panic in ai-doctor handler");

    let body = ErrorBody {
        error: format!("Server error: {}", truncate_chars(detail, 100)),
        success: Some(false),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Outer panic boundary: anything that escapes component-level handling is
/// reported as an opaque internal error.
pub fn internal_panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!(error = %panic_message(err.as_ref()), "Internal error");

    let body = ErrorBody {
        error: "Internal server error".to_string(),
        success: None,
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

fn panic_message(err: &(dyn Any + Send)) -> &str {
    if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    }
}

/// Truncate to at most `limit` characters, never splitting a char boundary.
pub fn truncate_chars(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn truncate_cuts_at_exactly_the_limit() {
        let long = "x".repeat(150);
        let cut = truncate_chars(&long, 100);
        assert_eq!(cut.chars().count(), 100);
        assert_eq!(cut, "x".repeat(100));
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        let s = "é".repeat(10);
        assert_eq!(truncate_chars(&s, 4), "éééé");
    }

    #[test]
    fn chat_panic_reports_truncated_server_error() {
        let response = chat_panic_response(Box::new("y".repeat(150)));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
