//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "wxart API",
        version = "0.2.0",
        description = "Weather-art generation service: turns live weather for a location into a validated 2D scene description for a generative-art renderer.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::generate::generate,
        crate::routes::geocode::geocode,
        crate::routes::scene::validate,
        crate::routes::scene::schema,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::routes::generate::GenerateRequest,
    )),
    tags(
        (name = "generate", description = "Agent-driven scene generation"),
        (name = "geocode", description = "City name resolution via Open-Meteo"),
        (name = "scene", description = "Scene validation and schema reflection"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
