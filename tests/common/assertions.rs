//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert JSON error body has expected status field
pub fn assert_json_status(response: &TestResponse, expected_status: u16) {
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected_status as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected_status,
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected error message");
}

/// Assert a sample response is well formed and return its points
pub fn assert_valid_sample_response(
    json: &serde_json::Value,
    expected_count: usize,
) -> Vec<serde_json::Value> {
    let points = json["points"]
        .as_array()
        .expect("Expected points array")
        .clone();
    assert_eq!(points.len(), expected_count, "Unexpected point count");

    for point in &points {
        let hex = point["hex"].as_str().expect("Expected hex string");
        assert_eq!(hex.len(), 7, "Hex should be #RRGGBB: {hex}");
        assert!(hex.starts_with('#'));
        assert_eq!(hex, hex.to_uppercase(), "Hex should be uppercase");

        let rgb = point["rgb"].as_array().expect("Expected rgb array");
        assert_eq!(rgb.len(), 3);
        let expected_hex = format!(
            "#{:02X}{:02X}{:02X}",
            rgb[0].as_u64().unwrap(),
            rgb[1].as_u64().unwrap(),
            rgb[2].as_u64().unwrap()
        );
        assert_eq!(hex, expected_hex);
    }
    points
}

/// Assert a match response keeps ids and matches in step
pub fn assert_valid_match_response(json: &serde_json::Value) {
    let matches = json["matches"].as_array().expect("Expected matches array");
    let ids = json["idArray"].as_array().expect("Expected idArray");
    assert_eq!(matches.len(), ids.len());
    for (m, id) in matches.iter().zip(ids) {
        assert_eq!(&m["matchedId"], id);
        assert!(m["distance"].as_f64().unwrap() >= 0.0);
    }
}
