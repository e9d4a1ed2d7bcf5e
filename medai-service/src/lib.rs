pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::startup::AppState;

pub fn build_router(state: AppState) -> Router {
    // The completion route carries its own panic boundary so a fault inside
    // the completion path is reported with that endpoint's error envelope.
    let chat_route = Router::new()
        .route(
            "/api/ai-doctor",
            post(handlers::chat::ai_doctor).options(handlers::chat::preflight),
        )
        .layer(CatchPanicLayer::custom(error::chat_panic_response));

    Router::new()
        .route("/api/health", get(handlers::health::health_check))
        .route("/api/specialists", get(handlers::directory::specialists))
        .route("/api/health-tips", get(handlers::directory::health_tips))
        .merge(chat_route)
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(error::internal_panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
}
