//! Open-Meteo client configuration.
//!
//! Defaults point at the public Open-Meteo endpoints. Override via
//! environment variables for proxies, mirrors, or tests.

use url::Url;

/// Configuration for the Open-Meteo geocoding and forecast clients.
#[derive(Debug, Clone)]
pub struct MeteoConfig {
    /// Geocoding search endpoint.
    /// Default: <https://geocoding-api.open-meteo.com/v1/search>
    pub geocoding_url: Url,
    /// Current-weather forecast endpoint.
    /// Default: <https://api.open-meteo.com/v1/forecast>
    pub forecast_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl MeteoConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `OPEN_METEO_GEOCODING_URL` (default: `https://geocoding-api.open-meteo.com/v1/search`)
    /// - `OPEN_METEO_FORECAST_URL` (default: `https://api.open-meteo.com/v1/forecast`)
    /// - `OPEN_METEO_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            geocoding_url: env_url(
                "OPEN_METEO_GEOCODING_URL",
                "https://geocoding-api.open-meteo.com/v1/search",
            )?,
            forecast_url: env_url(
                "OPEN_METEO_FORECAST_URL",
                "https://api.open-meteo.com/v1/forecast",
            )?,
            timeout_secs: std::env::var("OPEN_METEO_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        })
    }

    /// Create a configuration pointing at a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the localhost URL cannot be
    /// parsed (should not occur for valid port numbers, but avoids
    /// `expect()`).
    pub fn local_mock(port: u16) -> Result<Self, ConfigError> {
        let make_url = |path: &str| -> Result<Url, ConfigError> {
            Url::parse(&format!("http://127.0.0.1:{port}{path}"))
                .map_err(|e| ConfigError::InvalidUrl("localhost".to_string(), e.to_string()))
        };
        Ok(Self {
            geocoding_url: make_url("/v1/search")?,
            forecast_url: make_url("/v1/forecast")?,
            timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_mock_builds_valid_config() {
        let cfg = MeteoConfig::local_mock(9100).unwrap();
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.geocoding_url.as_str(), "http://127.0.0.1:9100/v1/search");
        assert_eq!(cfg.forecast_url.as_str(), "http://127.0.0.1:9100/v1/forecast");
    }

    #[test]
    fn env_url_uses_default_when_var_absent() {
        let url = env_url("NONEXISTENT_METEO_VAR_12345", "https://example.com/v1/x").unwrap();
        assert_eq!(url.as_str(), "https://example.com/v1/x");
    }

    #[test]
    fn env_url_rejects_invalid_url() {
        std::env::set_var("TEST_BAD_URL_METEO", "not a url");
        let result = env_url("TEST_BAD_URL_METEO", "https://example.com");
        std::env::remove_var("TEST_BAD_URL_METEO");
        assert!(result.is_err());
    }
}
