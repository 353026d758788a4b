//! # wxart-api — Binary Entry Point
//!
//! Starts the Axum HTTP server. Binds to a configurable port (default 8080).

use wxart_api::state::{ApiConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let config = ApiConfig { port };

    // Open-Meteo clients are always required.
    let meteo_config = wxart_meteo::MeteoConfig::from_env().map_err(|e| {
        tracing::error!("Open-Meteo configuration failed: {e}");
        e
    })?;
    let meteo = wxart_meteo::MeteoClient::new(meteo_config).map_err(|e| {
        tracing::error!("Open-Meteo client initialization failed: {e}");
        e
    })?;

    // The scene agent is optional: without it the generation endpoint
    // answers 503 while geocoding and validation keep working.
    let agent = match wxart_agent::AgentConfig::from_env() {
        Ok(agent_config) => {
            tracing::info!(model = %agent_config.model, "scene agent configured");
            match wxart_agent::SceneAgent::new(agent_config, meteo.clone()) {
                Ok(agent) => Some(agent),
                Err(e) => {
                    tracing::error!("Failed to create scene agent: {e}");
                    return Err(e.into());
                }
            }
        }
        Err(e) => {
            tracing::warn!("Scene agent not configured: {e}. /api/generate will return 503.");
            None
        }
    };

    let state = AppState::new(config, agent, meteo);
    let app = wxart_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("wxart API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
