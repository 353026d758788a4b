//! # Scene Validation & Schema Endpoints
//!
//! - `POST /api/validate` — validate a raw scene document (fenced or bare)
//!   and return its canonical form.
//! - `GET /api/schema` — the machine-readable scene JSON Schema.
//!
//! These expose the validation core directly, so external generators can
//! check their output without running the full agent.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

use wxart_scene::{scene_schema_json, validate_text, SceneResponse};

use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Build the scene validation/schema router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/validate", post(validate))
        .route("/api/schema", get(schema))
}

/// POST /api/validate — Validate a scene document.
///
/// The body is the raw scene text: plain JSON, or JSON wrapped in markdown
/// code fences as language models tend to produce.
#[utoipa::path(
    post,
    path = "/api/validate",
    request_body = String,
    responses(
        (status = 200, description = "Canonical scene with all defaults and presets resolved"),
        (status = 400, description = "Body is not valid JSON", body = ErrorBody),
        (status = 422, description = "Scene violates the schema", body = ErrorBody),
    ),
    tag = "scene"
)]
pub async fn validate(
    State(_state): State<AppState>,
    body: String,
) -> Result<Json<SceneResponse>, AppError> {
    let response = validate_text(&body)?;
    Ok(Json(response))
}

/// GET /api/schema — The scene JSON Schema.
#[utoipa::path(
    get,
    path = "/api/schema",
    responses(
        (status = 200, description = "JSON Schema for the scene document"),
    ),
    tag = "scene"
)]
pub async fn schema(State(_state): State<AppState>) -> Json<serde_json::Value> {
    Json(scene_schema_json())
}
