mod common;

use common::{test_config, CapturedLogs, TestApp};
use order_notification_service::startup::Application;
use reqwest::Client;
use tracing::instrument::WithSubscriber;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "order-notification-service");
}

#[tokio::test]
async fn binding_an_occupied_port_fails() {
    let app = TestApp::spawn().await;

    // No retry or fallback port: the second bind must surface the error.
    let result = Application::build(test_config(app.port)).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn startup_logs_banner_then_config_dump() {
    let logs = CapturedLogs::default();

    let app = Application::build(test_config(0))
        .with_subscriber(logs.subscriber())
        .await
        .expect("Failed to build application");
    drop(app);

    let output = logs.contents();
    let banner = output
        .find("HTTP server running")
        .expect("banner was not logged");
    let dump = output
        .find("Active configuration")
        .expect("configuration dump was not logged");

    assert!(banner < dump, "banner must precede the configuration dump");
    assert_eq!(output.matches("HTTP server running").count(), 1);
    assert_eq!(output.matches("Active configuration").count(), 1);
}

#[tokio::test]
async fn no_banner_is_logged_when_the_bind_fails() {
    let app = TestApp::spawn().await;
    let logs = CapturedLogs::default();

    let result = Application::build(test_config(app.port))
        .with_subscriber(logs.subscriber())
        .await;
    assert!(result.is_err());

    let output = logs.contents();
    assert!(!output.contains("HTTP server running"));
    assert!(!output.contains("Active configuration"));
}

#[tokio::test]
#[ignore] // Requires running PostgreSQL
async fn readiness_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore] // Requires running PostgreSQL with migrations applied
async fn unknown_notification_returns_404() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/notifications/does-not-exist", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}
