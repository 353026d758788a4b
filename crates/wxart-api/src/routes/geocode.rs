//! # Geocoding Endpoint
//!
//! - `GET /api/geocode?city=..` — resolve a city name to coordinates.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::IntoParams;

use wxart_meteo::GeocodedCity;

use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Query parameters for the geocoding endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GeocodeQuery {
    /// City name to look up.
    pub city: Option<String>,
}

/// Build the geocoding router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/geocode", get(geocode))
}

/// GET /api/geocode — Resolve a city name.
#[utoipa::path(
    get,
    path = "/api/geocode",
    params(GeocodeQuery),
    responses(
        (status = 200, description = "Best geocoding match for the city"),
        (status = 400, description = "Missing city parameter", body = ErrorBody),
        (status = 404, description = "City not found", body = ErrorBody),
        (status = 502, description = "Geocoding upstream failed", body = ErrorBody),
    ),
    tag = "geocode"
)]
pub async fn geocode(
    State(state): State<AppState>,
    Query(query): Query<GeocodeQuery>,
) -> Result<Json<GeocodedCity>, AppError> {
    let city = query
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("missing 'city' query parameter".to_string()))?;

    let result = state.meteo.geocoding().geocode(city).await?;
    Ok(Json(result))
}
