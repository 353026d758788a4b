//! Typed client for the Open-Meteo current-weather API.
//!
//! Calls `GET {base}/v1/forecast?latitude=..&longitude=..&current=..` and
//! maps the response to [`CurrentWeather`] with human-readable field names.

use serde::{Deserialize, Serialize};

use crate::error::MeteoError;
use crate::wmo::describe_weather_code;

/// The `current` parameter list requested from the forecast API.
const CURRENT_PARAMS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
weather_code,cloud_cover,wind_speed_10m,wind_direction_10m,\
wind_gusts_10m,precipitation,rain,snowfall,is_day";

/// Current weather conditions for a location, with the WMO code already
/// resolved to a description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature_c: f64,
    pub apparent_temperature_c: f64,
    pub humidity_pct: f64,
    pub weather_code: u16,
    pub weather_description: String,
    pub cloud_cover_pct: f64,
    pub wind_speed_kmh: f64,
    pub wind_direction_deg: f64,
    pub wind_gusts_kmh: f64,
    pub precipitation_mm: f64,
    pub rain_mm: f64,
    pub snowfall_cm: f64,
    pub is_day: bool,
}

/// Raw forecast response; only the `current` block is requested.
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub(crate) current: CurrentBlock,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentBlock {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    apparent_temperature: f64,
    weather_code: u16,
    cloud_cover: f64,
    wind_speed_10m: f64,
    wind_direction_10m: f64,
    wind_gusts_10m: f64,
    precipitation: f64,
    rain: f64,
    snowfall: f64,
    /// The API reports day/night as 0 or 1.
    is_day: u8,
}

impl From<CurrentBlock> for CurrentWeather {
    fn from(block: CurrentBlock) -> Self {
        Self {
            temperature_c: block.temperature_2m,
            apparent_temperature_c: block.apparent_temperature,
            humidity_pct: block.relative_humidity_2m,
            weather_code: block.weather_code,
            weather_description: describe_weather_code(block.weather_code).to_string(),
            cloud_cover_pct: block.cloud_cover,
            wind_speed_kmh: block.wind_speed_10m,
            wind_direction_deg: block.wind_direction_10m,
            wind_gusts_kmh: block.wind_gusts_10m,
            precipitation_mm: block.precipitation,
            rain_mm: block.rain,
            snowfall_cm: block.snowfall,
            is_day: block.is_day != 0,
        }
    }
}

/// Client for the Open-Meteo forecast API.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    url: url::Url,
}

impl WeatherClient {
    pub(crate) fn new(http: reqwest::Client, url: url::Url) -> Self {
        Self { http, url }
    }

    /// Fetch current weather for the given coordinates.
    pub async fn current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeather, MeteoError> {
        let endpoint = "GET /v1/forecast";
        tracing::debug!(latitude, longitude, "current weather request");

        let resp = self
            .http
            .get(self.url.clone())
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_PARAMS.to_string()),
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

        let parsed: ForecastResponse =
            resp.json().await.map_err(|e| MeteoError::Deserialize {
                endpoint: endpoint.into(),
                source: e,
            })?;

        Ok(parsed.current.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "latitude": 52.52,
        "longitude": 13.41,
        "current": {
            "time": "2026-02-10T18:30",
            "temperature_2m": 8.0,
            "relative_humidity_2m": 85,
            "apparent_temperature": 5.2,
            "weather_code": 61,
            "cloud_cover": 90,
            "wind_speed_10m": 25.0,
            "wind_direction_10m": 220,
            "wind_gusts_10m": 40.0,
            "precipitation": 1.2,
            "rain": 1.2,
            "snowfall": 0.0,
            "is_day": 0
        }
    }"#;

    #[test]
    fn forecast_response_maps_to_current_weather() {
        let parsed: ForecastResponse = serde_json::from_str(SAMPLE).unwrap();
        let weather: CurrentWeather = parsed.current.into();
        assert_eq!(weather.temperature_c, 8.0);
        assert_eq!(weather.apparent_temperature_c, 5.2);
        assert_eq!(weather.humidity_pct, 85.0);
        assert_eq!(weather.weather_code, 61);
        assert_eq!(weather.weather_description, "Slight rain");
        assert_eq!(weather.wind_speed_kmh, 25.0);
        assert_eq!(weather.precipitation_mm, 1.2);
        assert!(!weather.is_day);
    }

    #[test]
    fn is_day_one_means_daytime() {
        let parsed: ForecastResponse =
            serde_json::from_str(&SAMPLE.replace("\"is_day\": 0", "\"is_day\": 1")).unwrap();
        let weather: CurrentWeather = parsed.current.into();
        assert!(weather.is_day);
    }

    #[test]
    fn current_weather_serializes_with_readable_names() {
        let parsed: ForecastResponse = serde_json::from_str(SAMPLE).unwrap();
        let weather: CurrentWeather = parsed.current.into();
        let value = serde_json::to_value(&weather).unwrap();
        assert_eq!(value["temperature_c"], 8.0);
        assert_eq!(value["weather_description"], "Slight rain");
        assert_eq!(value["is_day"], false);
    }

    #[test]
    fn requested_params_cover_all_mapped_fields() {
        for param in [
            "temperature_2m",
            "relative_humidity_2m",
            "apparent_temperature",
            "weather_code",
            "cloud_cover",
            "wind_speed_10m",
            "wind_direction_10m",
            "wind_gusts_10m",
            "precipitation",
            "rain",
            "snowfall",
            "is_day",
        ] {
            assert!(CURRENT_PARAMS.contains(param), "missing {param}");
        }
    }
}
