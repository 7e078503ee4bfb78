//! Tests for the reference library endpoints and library configuration.

mod common;

use axum::http::StatusCode;
use common::fixtures::SMALL_LIBRARY_YAML;
use common::TestApp;
use pretty_assertions::assert_eq;
use swatchpick::models::AppConfig;
use swatchpick::server::create_app_state;

fn app_with_library(path: &std::path::Path) -> TestApp {
    TestApp::with_config(AppConfig {
        library: Some(path.to_path_buf()),
        ..AppConfig::default()
    })
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    common::assert_ok(&response);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_builtin_library_listing() {
    let app = TestApp::new();

    let response = app.get("/api/library").await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 502);
    assert_eq!(entries[0]["id"], 1);
    assert_eq!(entries[0]["hex"], "#060739");
    assert_eq!(entries[500]["hex"], "#FFFFFF");
    assert_eq!(entries[501]["id"], 502);
}

#[tokio::test]
async fn test_builtin_library_reload() {
    let app = TestApp::new();

    let response = app.post_empty("/api/library/reload").await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["entries"], 502);
    assert!(app.palette.matcher().await.is_preprocessed());
}

#[tokio::test]
async fn test_custom_library_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.yaml");
    std::fs::write(&path, SMALL_LIBRARY_YAML).unwrap();
    let app = app_with_library(&path);

    let json: serde_json::Value = app.get("/api/library").await.json();
    assert_eq!(json["entries"].as_array().unwrap().len(), 3);

    let response = app
        .post_json("/api/match", r##"{"colors": ["#EE1111", "#1111EE"]}"##)
        .await;
    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["idArray"], serde_json::json!([10, 30]));
    assert_eq!(json["matches"][0]["matchedHex"], "#ff0000");
}

#[tokio::test]
async fn test_reload_picks_up_file_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.yaml");
    std::fs::write(&path, SMALL_LIBRARY_YAML).unwrap();
    let app = app_with_library(&path);

    std::fs::write(&path, format!("{SMALL_LIBRARY_YAML}- id: 40\n  hex: \"#FFFFFF\"\n")).unwrap();
    let response = app.post_empty("/api/library/reload").await;

    common::assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["entries"], 4);

    let response = app
        .post_json("/api/match", r##"{"colors": ["#F8F8F8"]}"##)
        .await;
    let json: serde_json::Value = response.json();
    assert_eq!(json["idArray"], serde_json::json!([40]));
}

#[tokio::test]
async fn test_failed_reload_keeps_serving_old_library() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.yaml");
    std::fs::write(&path, SMALL_LIBRARY_YAML).unwrap();
    let app = app_with_library(&path);

    std::fs::write(&path, "- id: 1\n  hex: \"not a color\"\n").unwrap();
    let response = app.post_empty("/api/library/reload").await;

    common::assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
    common::assert_json_status(&response, 500);

    let json: serde_json::Value = app.get("/api/library").await.json();
    assert_eq!(json["entries"].as_array().unwrap().len(), 3);
}

#[test]
fn test_missing_library_file_fails_startup() {
    let config = AppConfig {
        library: Some("/nonexistent/library.yaml".into()),
        ..AppConfig::default()
    };
    assert!(create_app_state(&config).is_err());
}
