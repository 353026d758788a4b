//! # Scene Generation Endpoint
//!
//! - `POST /api/generate` — run the agent end to end: geocode, fetch
//!   weather, generate and validate a scene, return the canonical JSON.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::ToSchema;

use wxart_scene::SceneResponse;

use crate::error::{AppError, ErrorBody};
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Request to generate a weather-art scene.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Location name, e.g. "Berlin". May be empty when coordinates are given.
    #[serde(default)]
    pub location: String,
    /// Optional latitude; must be paired with `longitude`.
    pub latitude: Option<f64>,
    /// Optional longitude; must be paired with `latitude`.
    pub longitude: Option<f64>,
    /// Optional artistic style hint passed to the model.
    #[serde(default)]
    pub style_prompt: String,
}

impl Validate for GenerateRequest {
    fn validate(&self) -> Result<(), String> {
        let has_coords = self.latitude.is_some() && self.longitude.is_some();
        if self.location.trim().is_empty() && !has_coords {
            return Err("provide a location name or latitude/longitude".to_string());
        }
        Ok(())
    }
}

/// Build the generation router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/generate", post(generate))
}

/// POST /api/generate — Generate a validated scene for a location.
#[utoipa::path(
    post,
    path = "/api/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Validated scene document with all defaults resolved"),
        (status = 400, description = "Malformed request body", body = ErrorBody),
        (status = 422, description = "Missing location and coordinates", body = ErrorBody),
        (status = 502, description = "Agent or weather upstream failed", body = ErrorBody),
        (status = 503, description = "Scene agent is not configured", body = ErrorBody),
    ),
    tag = "generate"
)]
pub async fn generate(
    State(state): State<AppState>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<SceneResponse>, AppError> {
    let req = extract_validated_json(body)?;

    let Some(agent) = state.agent.as_ref() else {
        return Err(AppError::Unavailable(
            "scene agent is not configured".to_string(),
        ));
    };

    let location = if req.location.trim().is_empty() {
        "Unknown"
    } else {
        req.location.trim()
    };

    tracing::info!(location, "generating scene");
    let scene = agent
        .generate_scene(location, req.latitude, req.longitude, &req.style_prompt)
        .await?;

    Ok(Json(scene))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_alone_is_valid() {
        let req = GenerateRequest {
            location: "Berlin".to_string(),
            latitude: None,
            longitude: None,
            style_prompt: String::new(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn coordinates_alone_are_valid() {
        let req = GenerateRequest {
            location: String::new(),
            latitude: Some(52.52),
            longitude: Some(13.41),
            style_prompt: String::new(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn missing_location_and_coords_is_invalid() {
        let req = GenerateRequest {
            location: "  ".to_string(),
            latitude: None,
            longitude: None,
            style_prompt: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn half_a_coordinate_pair_is_invalid() {
        let req = GenerateRequest {
            location: String::new(),
            latitude: Some(52.52),
            longitude: None,
            style_prompt: String::new(),
        };
        assert!(req.validate().is_err());
    }
}
