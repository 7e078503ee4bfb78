//! Tests for /api/sample endpoint.

mod common;

use axum::http::StatusCode;
use common::fixtures::{gradient_png, quadrant_png, solid_png, to_base64, QUADRANT_COLORS};
use common::TestApp;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_sample_returns_requested_count() {
    let app = TestApp::new();

    let json = app
        .sample(json!({
            "image": to_base64(&quadrant_png(400)),
            "count": 6,
            "seed": 1
        }))
        .await;

    let points = common::assert_valid_sample_response(&json, 6);
    let ids: Vec<u64> = points.iter().map(|p| p["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(json["trials"], 1);
    assert_eq!(json["seed"], 1);
}

#[tokio::test]
async fn test_sample_points_stay_inside_margin() {
    let app = TestApp::new();

    let json = app
        .sample(json!({
            "image": to_base64(&gradient_png(300, 200)),
            "count": 20,
            "seed": 5
        }))
        .await;

    for point in common::assert_valid_sample_response(&json, 20) {
        let x = point["x"].as_f64().unwrap();
        let y = point["y"].as_f64().unwrap();
        assert!((16.0..=284.0).contains(&x), "x = {x}");
        assert!((16.0..=184.0).contains(&y), "y = {y}");
    }
}

#[tokio::test]
async fn test_sample_colors_come_from_image() {
    let app = TestApp::new();

    let json = app
        .sample(json!({
            "image": to_base64(&quadrant_png(400)),
            "count": 8,
            "seed": 3
        }))
        .await;

    for point in common::assert_valid_sample_response(&json, 8) {
        let rgb: Vec<u8> = point["rgb"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_u64().unwrap() as u8)
            .collect();
        assert!(
            QUADRANT_COLORS.iter().any(|c| c[..] == rgb[..]),
            "unexpected color {rgb:?}"
        );
    }
}

#[tokio::test]
async fn test_sample_consecutive_points_alternate_quadrants() {
    let app = TestApp::new();

    let json = app
        .sample(json!({
            "image": to_base64(&quadrant_png(400)),
            "count": 4,
            "seed": 11
        }))
        .await;

    // Four very different flat regions: each new point must differ from
    // the previous three, so all four colors appear.
    let points = common::assert_valid_sample_response(&json, 4);
    let mut hexes: Vec<&str> = points.iter().map(|p| p["hex"].as_str().unwrap()).collect();
    hexes.sort_unstable();
    hexes.dedup();
    assert_eq!(hexes.len(), 4);
}

#[tokio::test]
async fn test_sample_same_seed_is_reproducible() {
    let app = TestApp::new();
    let body = json!({
        "image": to_base64(&gradient_png(256, 256)),
        "count": 7,
        "seed": 1234,
        "optimize": true
    });

    let first = app.sample(body.clone()).await;
    let second = app.sample(body).await;
    assert_eq!(first["points"], second["points"]);
    assert_eq!(first["score"], second["score"]);
}

#[tokio::test]
async fn test_sample_optimize_runs_trials() {
    let app = TestApp::new();

    let json = app
        .sample(json!({
            "image": to_base64(&gradient_png(320, 320)),
            "count": 10,
            "seed": 9,
            "optimize": true
        }))
        .await;

    common::assert_valid_sample_response(&json, 10);
    assert_eq!(json["trials"], 5);
    assert!(json["score"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_sample_optimize_reuses_previous_ids() {
    let app = TestApp::new();

    let json = app
        .sample(json!({
            "image": to_base64(&gradient_png(320, 320)),
            "count": 3,
            "seed": 2,
            "optimize": true,
            "previous_ids": [40, 41]
        }))
        .await;

    let ids: Vec<u64> = common::assert_valid_sample_response(&json, 3)
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![40, 41, 42]);
}

#[tokio::test]
async fn test_sample_rejects_duplicate_previous_ids() {
    let app = TestApp::new();

    let body = json!({
        "image": to_base64(&gradient_png(320, 320)),
        "count": 3,
        "optimize": true,
        "previous_ids": [5, 5]
    });
    let response = app.post_json("/api/sample", &body.to_string()).await;

    common::assert_status(&response, StatusCode::BAD_REQUEST);
    common::assert_json_status(&response, 400);
}

#[tokio::test]
async fn test_sample_uses_display_coordinates() {
    let app = TestApp::new();

    let json = app
        .sample(json!({
            "image": to_base64(&quadrant_png(100)),
            "count": 5,
            "seed": 8,
            "display_width": 800,
            "display_height": 400
        }))
        .await;

    let points = common::assert_valid_sample_response(&json, 5);
    assert!(points
        .iter()
        .all(|p| p["x"].as_f64().unwrap() <= 784.0 && p["y"].as_f64().unwrap() <= 384.0));
    // With 100px natural size, any point past x=400 must be read from the
    // right half of the raster.
    for p in &points {
        if p["x"].as_f64().unwrap() >= 400.0 && p["y"].as_f64().unwrap() < 200.0 {
            assert_eq!(p["hex"], "#1EC828");
        }
    }
}

#[tokio::test]
async fn test_sample_default_count() {
    let app = TestApp::new();

    let json = app
        .sample(json!({ "image": to_base64(&gradient_png(300, 300)) }))
        .await;

    common::assert_valid_sample_response(&json, 9);
}

#[tokio::test]
async fn test_sample_zero_count() {
    let app = TestApp::new();

    let json = app
        .sample(json!({
            "image": to_base64(&gradient_png(100, 100)),
            "count": 0,
            "optimize": true
        }))
        .await;

    common::assert_valid_sample_response(&json, 0);
    assert_eq!(json["score"], 0.0);
}

#[tokio::test]
async fn test_sample_solid_image_still_fills_count() {
    let app = TestApp::new();

    let json = app
        .sample(json!({
            "image": to_base64(&solid_png(200, 200, [12, 34, 56])),
            "count": 5,
            "seed": 4
        }))
        .await;

    for point in common::assert_valid_sample_response(&json, 5) {
        assert_eq!(point["hex"], "#0C2238");
    }
}

#[tokio::test]
async fn test_sample_accepts_data_url() {
    let app = TestApp::new();
    let image = format!("data:image/png;base64,{}", to_base64(&quadrant_png(200)));

    let json = app.sample(json!({ "image": image, "count": 2 })).await;
    common::assert_valid_sample_response(&json, 2);
}

#[tokio::test]
async fn test_sample_rejects_large_count() {
    let app = TestApp::new();

    let body = json!({ "image": to_base64(&quadrant_png(200)), "count": 65 });
    let response = app.post_json("/api/sample", &body.to_string()).await;

    common::assert_status(&response, StatusCode::BAD_REQUEST);
    common::assert_json_status(&response, 400);
}

#[tokio::test]
async fn test_sample_rejects_invalid_base64() {
    let app = TestApp::new();

    let body = json!({ "image": "***", "count": 2 });
    let response = app.post_json("/api/sample", &body.to_string()).await;

    common::assert_status(&response, StatusCode::BAD_REQUEST);
    common::assert_json_status(&response, 400);
}

#[tokio::test]
async fn test_sample_rejects_non_image_data() {
    let app = TestApp::new();

    let body = json!({ "image": to_base64(b"plain text, not pixels"), "count": 2 });
    let response = app.post_json("/api/sample", &body.to_string()).await;

    common::assert_status(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sample_rejects_image_smaller_than_margins() {
    let app = TestApp::new();

    let body = json!({ "image": to_base64(&solid_png(30, 300, [0, 0, 0])), "count": 2 });
    let response = app.post_json("/api/sample", &body.to_string()).await;
    common::assert_status(&response, StatusCode::BAD_REQUEST);

    // A smaller margin makes the same image usable
    let body = json!({
        "image": to_base64(&solid_png(30, 300, [0, 0, 0])),
        "count": 2,
        "margin": 4
    });
    let response = app.post_json("/api/sample", &body.to_string()).await;
    common::assert_ok(&response);
}

#[tokio::test]
async fn test_sample_rejects_bad_display_size() {
    let app = TestApp::new();

    let body = json!({
        "image": to_base64(&quadrant_png(200)),
        "display_width": 9000,
        "display_height": 200
    });
    let response = app.post_json("/api/sample", &body.to_string()).await;
    common::assert_status(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sample_invalid_json() {
    let app = TestApp::new();

    let response = app.post_json("/api/sample", "not valid json").await;

    // Axum returns 400 for JSON syntax errors
    common::assert_status(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sample_missing_image_field() {
    let app = TestApp::new();

    let response = app.post_json("/api/sample", r#"{"count": 3}"#).await;

    // Axum returns 422 for well-formed JSON that does not fit the schema
    common::assert_status(&response, StatusCode::UNPROCESSABLE_ENTITY);
}
