//! Typed client for the Open-Meteo geocoding API.
//!
//! Calls `GET {base}/v1/search?name=..&count=1&language=en&format=json` and
//! returns the best match for a city name.

use serde::{Deserialize, Serialize};

use crate::error::MeteoError;

/// A geocoded city: the best match the geocoding API found for a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedCity {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Country name; empty when the API omits it.
    #[serde(default)]
    pub country: String,
    /// IANA timezone; empty when the API omits it.
    #[serde(default)]
    pub timezone: String,
}

/// Raw geocoding response. Fields use `#[serde(default)]` for resilience:
/// the API omits `results` entirely when nothing matched.
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodingResponse {
    #[serde(default)]
    pub(crate) results: Vec<GeocodeRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeRecord {
    pub(crate) name: String,
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    #[serde(default)]
    pub(crate) country: Option<String>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
}

/// Take the first geocoding result, or report the city as not found.
pub(crate) fn first_city(
    response: GeocodingResponse,
    city: &str,
) -> Result<GeocodedCity, MeteoError> {
    let record = response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| MeteoError::CityNotFound(city.to_string()))?;
    Ok(GeocodedCity {
        name: record.name,
        latitude: record.latitude,
        longitude: record.longitude,
        country: record.country.unwrap_or_default(),
        timezone: record.timezone.unwrap_or_default(),
    })
}

/// Client for the Open-Meteo geocoding API.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    url: url::Url,
}

impl GeocodeClient {
    pub(crate) fn new(http: reqwest::Client, url: url::Url) -> Self {
        Self { http, url }
    }

    /// Look up a city by name. Returns the first match.
    pub async fn geocode(&self, city: &str) -> Result<GeocodedCity, MeteoError> {
        let endpoint = "GET /v1/search";
        tracing::debug!(city, "geocoding request");

        let resp = self
            .http
            .get(self.url.clone())
            .query(&[
                ("name", city),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| MeteoError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(MeteoError::Api {
                endpoint: endpoint.into(),
                status,
                body,
            });
        }

        let parsed: GeocodingResponse =
            resp.json().await.map_err(|e| MeteoError::Deserialize {
                endpoint: endpoint.into(),
                source: e,
            })?;

        first_city(parsed, city)
    }
}
