//! Application startup and lifecycle management.
//!
//! Model selection happens exactly once here, before the listener starts
//! accepting requests; handlers only ever read the result.

use crate::build_router;
use crate::config::MedaiConfig;
use crate::services::model_init::{self, ActiveModel};
use service_core::error::AppError;
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: MedaiConfig,
    pub model: Option<ActiveModel>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: MedaiConfig) -> Result<Self, AppError> {
        let model = match config.gemini.api_key.as_deref() {
            Some(key) => model_init::select_model(key).await,
            None => {
                tracing::error!("GEMINI_API_KEY not found in environment variables");
                None
            }
        };

        let state = AppState {
            config: config.clone(),
            model,
        };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Medai service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}
