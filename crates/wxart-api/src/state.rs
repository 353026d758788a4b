//! Shared application state and configuration.

use std::sync::Arc;

use wxart_agent::SceneAgent;
use wxart_meteo::MeteoClient;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// TCP port the server binds to.
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

/// Shared state handed to every handler.
///
/// The scene agent is optional: when no Ollama server is configured the
/// generation endpoint answers 503 while geocoding and validation keep
/// working.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub agent: Option<Arc<SceneAgent>>,
    pub meteo: Arc<MeteoClient>,
}

impl AppState {
    /// Assemble application state.
    pub fn new(config: ApiConfig, agent: Option<SceneAgent>, meteo: MeteoClient) -> Self {
        Self {
            config,
            agent: agent.map(Arc::new),
            meteo: Arc::new(meteo),
        }
    }
}
