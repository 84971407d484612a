//! HTTP API tests
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use crop_advisor_backend::{config::Config, create_app, AppState};
use serde_json::Value;
use shared::{Catalog, CropCategory, CropProfile, Range, Season};
use tower::ServiceExt;

fn app_with(catalog: Catalog, seed: Option<u64>) -> Router {
    let mut config = Config::default();
    config.sampling.seed = seed;
    create_app(AppState::new(config, catalog).unwrap())
}

fn app() -> Router {
    app_with(Catalog::standard(), None)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_healthy() {
    for uri in ["/health", "/api/health"] {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }
}

#[tokio::test]
async fn analyze_returns_full_report() {
    let response = app()
        .oneshot(post_json("/api/analyze", r#"{"location": "Hyderabad"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["weather"]["location"], "Hyderabad");
    assert!(json["weather"]["temperature"].is_number());
    assert!(json["weather"]["description"].is_string());
    assert!(json["soil"]["ph"].is_number());
    assert!(json["soil"]["nitrogen"].is_i64());
    assert!(json["timestamp"].is_string());

    let recommendations = json["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 10);

    let first = &recommendations[0];
    assert!(first["crop"].is_string());
    assert!(["vegetables", "grains", "general"].contains(&first["category"].as_str().unwrap()));
    assert!(["winter", "summer", "monsoon"].contains(&first["suitable_season"].as_str().unwrap()));
    assert!(["rising", "stable", "falling"].contains(&first["market"]["trend"].as_str().unwrap()));
    assert!(["high", "medium", "low"].contains(&first["market"]["demand"].as_str().unwrap()));
    assert!(first["market"]["current_price"].is_i64());
    assert!(first["market"]["forecast"].is_i64());

    let scores: Vec<f64> = recommendations
        .iter()
        .map(|r| r["score"].as_f64().unwrap())
        .collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[tokio::test]
async fn analyze_is_served_without_api_prefix() {
    let response = app()
        .oneshot(post_json("/analyze", r#"{"location": "Pune"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["weather"]["location"], "Pune");
}

#[tokio::test]
async fn analyze_defaults_location_to_delhi() {
    for body in [r#"{}"#, r#"{"location": ""}"#, r#"{"location": null}"#] {
        let response = app().oneshot(post_json("/api/analyze", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["weather"]["location"], "Delhi");
        assert_eq!(json["recommendations"].as_array().unwrap().len(), 10);
    }
}

#[tokio::test]
async fn analyze_echoes_whitespace_location() {
    let response = app()
        .oneshot(post_json("/api/analyze", r#"{"location": "   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["weather"]["location"], "   ");
    assert_eq!(json["recommendations"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn analyze_with_small_catalog_returns_every_crop() {
    let catalog = Catalog::new(vec![CropProfile::new(
        "Cotton",
        CropCategory::General,
        Range::new(21.0, 35.0),
        Range::new(50.0, 100.0),
        Range::new(6.0, 7.5),
        Season::Summer,
    )]);

    let response = app_with(catalog, None)
        .oneshot(post_json("/api/analyze", r#"{"location": ""}"#))
        .await
        .unwrap();

    let json = body_json(response).await;
    let recommendations = json["recommendations"].as_array().unwrap();
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0]["crop"], "Cotton");
    assert_eq!(recommendations[0]["category"], "general");
}

#[tokio::test]
async fn analyze_with_seed_is_reproducible() {
    let app = app_with(Catalog::standard(), Some(99));

    let first = body_json(
        app.clone()
            .oneshot(post_json("/api/analyze", r#"{"location": "Delhi"}"#))
            .await
            .unwrap(),
    )
    .await;
    let second = body_json(
        app.oneshot(post_json("/api/analyze", r#"{"location": "Delhi"}"#))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(first["weather"], second["weather"]);
    assert_eq!(first["soil"], second["soil"]);
    assert_eq!(first["recommendations"], second["recommendations"]);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let response = app()
        .oneshot(post_json("/api/analyze", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INVALID_REQUEST");
    assert!(json.get("recommendations").is_none());
}

#[tokio::test]
async fn wrong_field_type_is_bad_request() {
    let response = app()
        .oneshot(post_json("/api/analyze", r#"{"location": 42}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_content_type_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .body(Body::from(r#"{"location": "Delhi"}"#))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"location": "Delhi"}"#))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[test]
fn invalid_catalog_is_rejected_at_startup() {
    let catalog = Catalog::new(vec![CropProfile::new(
        "Wheat",
        CropCategory::Grains,
        Range::new(25.0, 10.0),
        Range::new(30.0, 80.0),
        Range::new(6.0, 7.5),
        Season::Winter,
    )]);

    assert!(AppState::new(Config::default(), catalog).is_err());
}
