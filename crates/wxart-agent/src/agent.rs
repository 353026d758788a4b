//! The scene-generation agent: tool loop, tool dispatch, and final-answer
//! validation.
//!
//! Each generation request runs a fresh conversation. The model is handed
//! the weather tools plus the scene format reference and validator; its
//! final answer is fence-stripped and validated before anything is returned
//! to the caller. Tool failures are fed back to the model as error text so
//! it can self-correct, rather than aborting the conversation.

use serde_json::Value;

use wxart_meteo::MeteoClient;
use wxart_scene::{format_guide, validate_text, SceneResponse};

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::ollama::OllamaClient;
use crate::prompts::{scene_request_message, SCENE_SYSTEM_PROMPT, WEATHER_REPORTER_PROMPT};
use crate::tools::{reporter_tools, scene_tools};
use crate::{Message, ToolCall};

/// Agent that turns a location into a validated weather-art scene.
#[derive(Debug, Clone)]
pub struct SceneAgent {
    ollama: OllamaClient,
    meteo: MeteoClient,
    max_turns: u32,
}

impl SceneAgent {
    /// Create an agent from configuration and an Open-Meteo client.
    pub fn new(config: AgentConfig, meteo: MeteoClient) -> Result<Self, AgentError> {
        let max_turns = config.max_turns;
        Ok(Self {
            ollama: OllamaClient::new(config)?,
            meteo,
            max_turns,
        })
    }

    /// Generate a validated weather-art scene for the given location.
    ///
    /// The returned scene is canonical: every default and preset field is
    /// materialized, so the caller never needs to re-derive them.
    pub async fn generate_scene(
        &self,
        location: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
        style_prompt: &str,
    ) -> Result<SceneResponse, AgentError> {
        let mut messages = vec![
            Message::system(SCENE_SYSTEM_PROMPT),
            Message::user(scene_request_message(
                location,
                latitude,
                longitude,
                style_prompt,
            )),
        ];
        let tools = scene_tools();

        for turn in 0..self.max_turns {
            let reply = self.ollama.chat(&messages, &tools).await?;

            if reply.tool_calls.is_empty() {
                tracing::debug!(turn, "agent produced final answer");
                return Ok(validate_text(&reply.content)?);
            }

            messages.push(Message::assistant(
                reply.content.clone(),
                reply.tool_calls.clone(),
            ));
            for call in &reply.tool_calls {
                tracing::debug!(tool = %call.function.name, "dispatching tool call");
                let result = self.dispatch(call).await;
                messages.push(Message::tool(result));
            }
        }

        Err(AgentError::ToolLoopLimit {
            turns: self.max_turns,
        })
    }

    /// Produce a short natural-language weather description for a location.
    pub async fn describe_weather(&self, request: &str) -> Result<String, AgentError> {
        let mut messages = vec![
            Message::system(WEATHER_REPORTER_PROMPT),
            Message::user(request),
        ];
        let tools = reporter_tools();

        for _ in 0..self.max_turns {
            let reply = self.ollama.chat(&messages, &tools).await?;

            if reply.tool_calls.is_empty() {
                return Ok(reply.content.trim().to_string());
            }

            messages.push(Message::assistant(
                reply.content.clone(),
                reply.tool_calls.clone(),
            ));
            for call in &reply.tool_calls {
                let result = self.dispatch(call).await;
                messages.push(Message::tool(result));
            }
        }

        Err(AgentError::ToolLoopLimit {
            turns: self.max_turns,
        })
    }

    /// Execute one tool call and render its result as message content.
    ///
    /// Failures become error text for the model rather than hard errors:
    /// the model is expected to adjust and retry.
    pub(crate) async fn dispatch(&self, call: &ToolCall) -> String {
        let args = &call.function.arguments;
        match call.function.name.as_str() {
            "geocode_location" => match args.get("city_name").and_then(Value::as_str) {
                None => tool_error("geocode_location requires a city_name argument"),
                Some(city) => match self.meteo.geocoding().geocode(city).await {
                    Ok(result) => encode_result(&result),
                    Err(err) => tool_error(&err.to_string()),
                },
            },
            "get_weather" => {
                let latitude = args.get("latitude").and_then(Value::as_f64);
                let longitude = args.get("longitude").and_then(Value::as_f64);
                match (latitude, longitude) {
                    (Some(lat), Some(lon)) => match self.meteo.weather().current(lat, lon).await {
                        Ok(result) => encode_result(&result),
                        Err(err) => tool_error(&err.to_string()),
                    },
                    _ => tool_error("get_weather requires latitude and longitude arguments"),
                }
            }
            "get_scene_format" => format_guide(),
            "validate_scene" => match args.get("scene_json").and_then(Value::as_str) {
                None => tool_error("validate_scene requires a scene_json argument"),
                Some(text) => match validate_text(text) {
                    Ok(response) => encode_result(&response),
                    Err(err) => format!(
                        "Validation failed: {}. Please fix and try again.",
                        err.report().replace('\n', "; ")
                    ),
                },
            },
            unknown => {
                tracing::warn!(tool = unknown, "model requested an unknown tool");
                tool_error(&format!("unknown tool: {unknown}"))
            }
        }
    }
}

fn encode_result<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|e| tool_error(&format!("failed to encode tool result: {e}")))
}

fn tool_error(message: &str) -> String {
    serde_json::json!({"status": "error", "error": message}).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FunctionCall;
    use wxart_meteo::MeteoConfig;

    fn agent() -> SceneAgent {
        let meteo = MeteoClient::new(MeteoConfig::local_mock(9500).unwrap()).unwrap();
        SceneAgent::new(AgentConfig::local_mock(9501).unwrap(), meteo).unwrap()
    }

    fn call(name: &str, arguments: Value) -> ToolCall {
        ToolCall {
            function: FunctionCall {
                name: name.to_string(),
                arguments,
            },
        }
    }

    #[tokio::test]
    async fn scene_format_tool_returns_the_guide() {
        let result = agent()
            .dispatch(&call("get_scene_format", serde_json::json!({})))
            .await;
        assert!(result.contains("6 Element Types"));
        assert!(result.contains("particle_system"));
    }

    #[tokio::test]
    async fn validate_tool_accepts_a_valid_scene() {
        let result = agent()
            .dispatch(&call(
                "validate_scene",
                serde_json::json!({"scene_json": "{\"scene\": {\"elements\": []}}"}),
            ))
            .await;
        // Canonical JSON comes back with defaults materialized.
        let value: Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["scene"]["canvas"]["width"], 800);
    }

    #[tokio::test]
    async fn validate_tool_reports_fixable_errors() {
        let result = agent()
            .dispatch(&call(
                "validate_scene",
                serde_json::json!({"scene_json": "{\"scene\": {\"elements\": [{\"type\": \"hexagon\"}]}}"}),
            ))
            .await;
        assert!(result.starts_with("Validation failed:"));
        assert!(result.contains("hexagon"));
        assert!(result.contains("Please fix and try again."));
    }

    #[tokio::test]
    async fn validate_tool_strips_fences() {
        let fenced = "```json\n{\"scene\": {\"elements\": []}}\n```";
        let result = agent()
            .dispatch(&call(
                "validate_scene",
                serde_json::json!({"scene_json": fenced}),
            ))
            .await;
        let value: Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["scene"]["canvas"]["height"], 600);
    }

    #[tokio::test]
    async fn missing_arguments_become_model_feedback() {
        let result = agent()
            .dispatch(&call("geocode_location", serde_json::json!({})))
            .await;
        let value: Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["status"], "error");
    }

    #[tokio::test]
    async fn unknown_tool_becomes_model_feedback() {
        let result = agent()
            .dispatch(&call("launch_rockets", serde_json::json!({})))
            .await;
        let value: Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["status"], "error");
        assert!(value["error"].as_str().unwrap().contains("launch_rockets"));
    }
}
