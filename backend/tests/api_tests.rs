//! HTTP API tests
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`, no socket.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use brewer_server::{config::ServerConfig, create_app, AppState, Config};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app_with_static_dir(static_dir: &str) -> Router {
    let config = Config {
        environment: "test".to_string(),
        server: ServerConfig {
            static_dir: static_dir.to_string(),
            ..Default::default()
        },
    };
    create_app(AppState::new(config))
}

fn app() -> Router {
    app_with_static_dir("static")
}

async fn send(app: Router, method: Method, uri: &str, body: Option<String>) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(Body::from(body.unwrap_or_default()))
        .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Failed to execute request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

async fn post_json(app: Router, uri: &str, payload: Value) -> (StatusCode, Value) {
    let (status, body) = send(app, Method::POST, uri, Some(payload.to_string())).await;
    let value = serde_json::from_str(&body).expect("Response is not JSON");
    (status, value)
}

// ============================================================================
// Scoring
// ============================================================================

#[tokio::test]
async fn test_score_ideal_espresso() {
    let (status, body) = post_json(
        app(),
        "/api/score",
        json!({
            "method": "espresso",
            "coffee_dose": 18,
            "water_yield": 36,
            "temperature": 91.5,
            "brew_time": 30,
            "grind_size": "fine",
            "roast_level": "medium"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_score"], 100);
    assert_eq!(body["ratio_score"], 40);
    assert_eq!(body["calculated_ratio"], 2.0);
    assert_eq!(body["ideal_ratio"], "1:2 - 1:2.5");
    assert_eq!(
        body["feedback"][0],
        "Luar biasa! Seduhan yang sangat ideal dan seimbang."
    );
    assert_eq!(body["flavor"]["body"], 8);
}

#[tokio::test]
async fn test_score_french_press_grind_penalty() {
    let (status, body) = post_json(
        app(),
        "/api/score",
        json!({
            "method": "frenchpress",
            "coffee_dose": 20,
            "water_yield": 300,
            "temperature": 94,
            "brew_time": 270,
            "grind_size": "medium"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_score"], 95);
    assert_eq!(body["feedback"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_score_zero_dose_is_not_an_http_error() {
    let (status, body) = post_json(app(), "/api/score", json!({ "coffee_dose": 0 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["feedback"], json!(["Dose kopi harus lebih dari 0g."]));
    assert_eq!(body["total_score"], 0);
}

#[tokio::test]
async fn test_score_null_fields_use_zero_values() {
    let (status, body) = post_json(
        app(),
        "/api/score",
        json!({
            "method": null,
            "coffee_dose": 15,
            "water_yield": 240,
            "temperature": 93,
            "brew_time": null,
            "grind_size": null,
            "roast_level": null
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ideal_ratio"], "1:15 - 1:17");
    assert_eq!(body["calculated_ratio"], 16.0);
    assert_eq!(body["ratio_score"], 40);
    assert_eq!(body["time_score"], 0);
}

#[tokio::test]
async fn test_score_malformed_json() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/api/score",
        Some("{not json".to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert_eq!(body["error"]["message_id"], "Permintaan tidak valid.");
}

#[tokio::test]
async fn test_score_wrong_field_type() {
    let (status, _) = post_json(app(), "/api/score", json!({ "coffee_dose": "lots" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_score_rejects_get() {
    let (status, _) = send(app(), Method::GET, "/api/score", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// ============================================================================
// Brew Helpers
// ============================================================================

#[tokio::test]
async fn test_calculator() {
    let (status, body) = post_json(
        app(),
        "/api/calculator",
        json!({ "coffee_dose": 15, "target_ratio": 16 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["water_yield"], 240.0);
}

#[tokio::test]
async fn test_calculator_invalid_ratio() {
    let (status, body) = post_json(
        app(),
        "/api/calculator",
        json!({ "coffee_dose": 15, "target_ratio": 0 }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "CALCULATOR_ERROR");
    assert_eq!(body["error"]["field"], "target_ratio");
}

#[tokio::test]
async fn test_recipe_card() {
    let (status, body) = post_json(
        app(),
        "/api/recipe-card",
        json!({
            "recipe": { "method": "aeropress", "coffee_dose": 15, "water_yield": 180, "temperature": 85, "brew_time": 120 },
            "total_score": 100
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let text = body["text"].as_str().unwrap();
    assert!(text.contains("Method: AEROPRESS"));
    assert!(text.ends_with("Score: 100/100"));
}

// ============================================================================
// Health & Static Files
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "test");
}

#[tokio::test]
async fn test_serves_static_index() {
    let dir = std::env::temp_dir().join(format!("brewer-static-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<h1>Celestial Brew</h1>").unwrap();

    let (status, body) = send(
        app_with_static_dir(dir.to_str().unwrap()),
        Method::GET,
        "/",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Celestial Brew"));

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_unknown_static_path_is_not_found() {
    let dir = std::env::temp_dir().join(format!("brewer-empty-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let (status, _) = send(
        app_with_static_dir(dir.to_str().unwrap()),
        Method::GET,
        "/missing.js",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    std::fs::remove_dir_all(&dir).ok();
}
