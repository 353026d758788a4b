//! # wxart-meteo — Open-Meteo Clients
//!
//! Typed, ergonomic access to the two upstream services the weather-art
//! system depends on:
//!
//! - **Geocoding** via `geocoding-api.open-meteo.com` — city name to
//!   coordinates.
//! - **Current weather** via `api.open-meteo.com` — coordinates to
//!   conditions, with WMO codes resolved to descriptions.
//!
//! This crate is the only path to upstream weather data; the agent and the
//! API layer never issue raw HTTP requests themselves.

pub mod config;
pub mod error;
pub mod geocoding;
pub mod weather;
pub mod wmo;

pub use config::MeteoConfig;
pub use error::MeteoError;
pub use geocoding::{GeocodeClient, GeocodedCity};
pub use weather::{CurrentWeather, WeatherClient};
pub use wmo::describe_weather_code;

use std::time::Duration;

/// Top-level Open-Meteo client holding both sub-clients.
#[derive(Debug, Clone)]
pub struct MeteoClient {
    geocoding: GeocodeClient,
    weather: WeatherClient,
}

impl MeteoClient {
    /// Create a new Open-Meteo client from configuration.
    pub fn new(config: MeteoConfig) -> Result<Self, MeteoError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MeteoError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            geocoding: GeocodeClient::new(http.clone(), config.geocoding_url),
            weather: WeatherClient::new(http, config.forecast_url),
        })
    }

    /// Access the geocoding client.
    pub fn geocoding(&self) -> &GeocodeClient {
        &self.geocoding
    }

    /// Access the current-weather client.
    pub fn weather(&self) -> &WeatherClient {
        &self.weather
    }
}
