//! Error types for the scene-generation agent.

use thiserror::Error;

use wxart_meteo::MeteoError;
use wxart_scene::SceneError;

/// Errors raised while driving the model and its tools.
#[derive(Error, Debug)]
pub enum AgentError {
    /// The Ollama request could not be sent or timed out.
    #[error("Ollama request failed: {source}")]
    Http {
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// Ollama answered with a non-success status.
    #[error("Ollama returned {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The chat response did not have the expected shape.
    #[error("malformed Ollama response: {0}")]
    MalformedResponse(String),

    /// A weather or geocoding call made outside the tool loop failed.
    #[error(transparent)]
    Meteo(#[from] MeteoError),

    /// The model's final answer was rejected by the scene validator.
    #[error("generated scene was rejected: {0}")]
    Scene(#[from] SceneError),

    /// The model kept calling tools without producing a final answer.
    #[error("model did not produce a final answer within {turns} tool turns")]
    ToolLoopLimit {
        /// The configured turn budget.
        turns: u32,
    },

    /// Agent configuration was invalid.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_rejection_embeds_the_cause() {
        let scene_err = wxart_scene::SceneError::validation(vec![wxart_scene::FieldError::new(
            "elements[0].count",
            "must be between 1 and 1000",
        )]);
        let err = AgentError::from(scene_err);
        let msg = err.to_string();
        assert!(msg.contains("rejected"));
        assert!(msg.contains("1 validation error(s)"));
    }

    #[test]
    fn tool_loop_limit_names_the_budget() {
        let err = AgentError::ToolLoopLimit { turns: 12 };
        assert!(err.to_string().contains("12"));
    }
}
