//! Router-level tests exercising the full middleware and handler stack
//! without a running server. The scene agent is left unconfigured, so the
//! generation endpoint must answer 503 while everything else keeps working.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use wxart_api::state::{ApiConfig, AppState};
use wxart_meteo::{MeteoClient, MeteoConfig};

fn test_app() -> axum::Router {
    let meteo = MeteoClient::new(MeteoConfig::local_mock(9700).expect("mock config"))
        .expect("meteo client");
    wxart_api::app(AppState::new(ApiConfig::default(), None, meteo))
}

async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = test_app().oneshot(request).await.expect("request handled");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body read")
        .to_bytes();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, value)
}

fn post_text(path: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .body(Body::from(body.to_string()))
        .expect("request built")
}

fn post_json(path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request built")
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .expect("request built")
}

#[tokio::test]
async fn health_probes_answer() {
    let response = test_app().oneshot(get("/health/liveness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = test_app().oneshot(get("/health/readiness")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn validate_returns_canonical_scene() {
    let (status, body) = send(post_text("/api/validate", r#"{"scene": {"elements": []}}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scene"]["canvas"]["width"], 800);
    assert_eq!(body["scene"]["canvas"]["height"], 600);
    assert_eq!(body["scene"]["background"]["type"], "solid");
    assert_eq!(body["scene"]["background"]["color"], "#000000");
}

#[tokio::test]
async fn validate_accepts_fenced_input() {
    let fenced = "```json\n{\"scene\": {\"elements\": []}}\n```";
    let (status, body) = send(post_text("/api/validate", fenced)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scene"]["canvas"]["width"], 800);
}

#[tokio::test]
async fn validate_resolves_particle_presets() {
    let scene = r#"{"scene": {"elements": [{"type": "particle_system", "preset": "rain"}]}}"#;
    let (status, body) = send(post_text("/api/validate", scene)).await;
    assert_eq!(status, StatusCode::OK);
    let ps = &body["scene"]["elements"][0];
    assert_eq!(ps["particle_shape"], "line");
    assert_eq!(ps["count"], 200);
    assert_eq!(ps["angle"], 260.0);
}

#[tokio::test]
async fn validate_rejects_non_json_as_400() {
    let (status, body) = send(post_text("/api/validate", "this is not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn validate_rejects_schema_violations_as_422_with_details() {
    let (status, body) = send(post_text("/api/validate", r#"{"not_scene": {}}"#)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["details"][0]["path"], "scene");
}

#[tokio::test]
async fn validate_rejects_removed_element_types() {
    let scene = r#"{"scene": {"elements": [{"type": "circle", "x": 0, "y": 0, "radius": 5}]}}"#;
    let (status, body) = send(post_text("/api/validate", scene)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["details"][0]["path"], "elements[0].type");
}

#[tokio::test]
async fn schema_endpoint_serves_the_reflection_output() {
    let (status, body) = send(get("/api/schema")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["properties"]["scene"].is_object());
}

#[tokio::test]
async fn geocode_without_city_is_400() {
    let (status, body) = send(get("/api/geocode")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (status, _) = send(get("/api/geocode?city=%20")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn geocode_with_unreachable_upstream_is_502() {
    let (status, body) = send(get("/api/geocode?city=Berlin")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn generate_without_agent_is_503() {
    let (status, body) = send(post_json(
        "/api/generate",
        serde_json::json!({"location": "Berlin"}),
    ))
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn generate_without_location_or_coords_is_422() {
    let (status, body) = send(post_json("/api/generate", serde_json::json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn generate_with_malformed_body_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn openapi_spec_is_served() {
    let (status, body) = send(get("/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/generate"].is_object());
    assert!(body["paths"]["/api/validate"].is_object());
}
