//! Integration tests exercising the running HTTP server.
//!
//! The app is spawned without a Gemini API key, so startup skips model
//! selection entirely and nothing here touches the network beyond
//! localhost.

use medai_service::config::MedaiConfig;
use medai_service::startup::Application;
use reqwest::Client;
use std::time::Duration;

/// Spawn the application on a random port and return the port number.
async fn spawn_app() -> u16 {
    std::env::remove_var("GEMINI_API_KEY");
    std::env::set_var("APP__PORT", "0");
    std::env::set_var("APP__LOG_LEVEL", "error");

    let config = MedaiConfig::load().expect("Failed to load config");
    let app = Application::build(config)
        .await
        .expect("Failed to build application");

    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    port
}

#[tokio::test]
async fn health_check_reports_degraded_configuration() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/api/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["gemini_configured"], false);
    assert_eq!(body["model"], "Unknown");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn ai_endpoint_is_disabled_without_a_key() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .post(format!("http://localhost:{}/api/ai-doctor", port))
        .json(&serde_json::json!({ "message": "I have a headache" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["error"],
        "AI model not initialized. Check your API key and try restarting."
    );
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn unknown_route_returns_not_found() {
    let port = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/api/does-not-exist", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 404);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Endpoint not found");
}
