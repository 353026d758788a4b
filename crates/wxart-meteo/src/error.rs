//! Error types for Open-Meteo client operations.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors returned by the geocoding and weather clients.
///
/// Each variant names the endpoint that failed so operators can tell the
/// two upstream services apart in logs.
#[derive(Error, Debug)]
pub enum MeteoError {
    /// The HTTP request could not be sent or timed out.
    #[error("HTTP request failed for {endpoint}: {source}")]
    Http {
        /// Label of the endpoint that failed.
        endpoint: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// Open-Meteo answered with a non-success status.
    #[error("Open-Meteo returned {status} for {endpoint}: {body}")]
    Api {
        /// Label of the endpoint that failed.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("failed to decode {endpoint} response: {source}")]
    Deserialize {
        /// Label of the endpoint that failed.
        endpoint: String,
        /// Underlying decode error.
        #[source]
        source: reqwest::Error,
    },

    /// The geocoding API returned no results for the requested city.
    #[error("city not found: {0}")]
    CityNotFound(String),

    /// Client configuration was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_not_found_names_the_city() {
        let err = MeteoError::CityNotFound("Xyzzy".to_string());
        assert_eq!(err.to_string(), "city not found: Xyzzy");
    }

    #[test]
    fn api_error_includes_status_and_endpoint() {
        let err = MeteoError::Api {
            endpoint: "GET /v1/forecast".to_string(),
            status: 429,
            body: "rate limited".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("/v1/forecast"));
        assert!(msg.contains("rate limited"));
    }
}
