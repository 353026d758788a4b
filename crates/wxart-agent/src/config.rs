//! Agent configuration.
//!
//! Points the agent at an Ollama server. Defaults assume a local install;
//! override via environment variables.

use url::Url;

/// Configuration for the Ollama-backed scene agent.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Base URL of the Ollama server.
    /// Default: <http://127.0.0.1:11434>
    pub host: Url,
    /// Model identifier passed to Ollama.
    pub model: String,
    /// Request timeout in seconds. Generation can be slow on small machines.
    pub timeout_secs: u64,
    /// Upper bound on chat turns before the agent gives up.
    pub max_turns: u32,
}

impl AgentConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `OLLAMA_HOST` (default: `http://127.0.0.1:11434`)
    /// - `OLLAMA_MODEL_ID` (default: `llama3.2`)
    /// - `OLLAMA_TIMEOUT_SECS` (default: 120)
    /// - `WXART_AGENT_MAX_TURNS` (default: 12)
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_host =
            std::env::var("OLLAMA_HOST").unwrap_or_else(|_| "http://127.0.0.1:11434".to_string());
        let host = Url::parse(&raw_host)
            .map_err(|e| ConfigError::InvalidUrl("OLLAMA_HOST".to_string(), e.to_string()))?;

        Ok(Self {
            host,
            model: std::env::var("OLLAMA_MODEL_ID").unwrap_or_else(|_| "llama3.2".to_string()),
            timeout_secs: std::env::var("OLLAMA_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
            max_turns: std::env::var("WXART_AGENT_MAX_TURNS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(12),
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
        let host = Url::parse(&format!("http://127.0.0.1:{port}"))
            .map_err(|e| ConfigError::InvalidUrl("localhost".to_string(), e.to_string()))?;
        Ok(Self {
            host,
            model: "test-model".to_string(),
            timeout_secs: 5,
            max_turns: 4,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
