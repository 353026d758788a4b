//! Ollama chat client: request building, response parsing, tool calling.
//!
//! Speaks the non-streaming `/api/chat` protocol. Tool definitions are
//! attached to every request; when the model answers with tool calls the
//! caller executes them and feeds the results back as `tool` messages.

use serde_json::Value;

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::tools::to_ollama_tool;
use crate::{Message, ToolCall, ToolDefinition};

/// One parsed assistant turn: free text plus any requested tool calls.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub content: String,
    pub tool_calls: Vec<ToolCall>,
}

/// Client for an Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    config: AgentConfig,
    chat_url: url::Url,
    http: reqwest::Client,
}

impl OllamaClient {
    /// Create a new client from configuration.
    pub fn new(config: AgentConfig) -> Result<Self, AgentError> {
        let chat_url = config.host.join("api/chat").map_err(|e| {
            crate::config::ConfigError::InvalidUrl("OLLAMA_HOST".to_string(), e.to_string())
        })?;
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AgentError::Http { source: e })?;
        Ok(Self {
            config,
            chat_url,
            http,
        })
    }

    /// Build the JSON request body for `/api/chat`.
    pub(crate) fn build_request_body(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Value {
        let mut body = serde_json::json!({
            "model": self.config.model,
            "messages": messages,
            "stream": false,
        });
        if !tools.is_empty() {
            let defs: Vec<Value> = tools.iter().map(to_ollama_tool).collect();
            body["tools"] = Value::Array(defs);
        }
        body
    }

    /// Parse a chat response into content and tool calls.
    pub(crate) fn parse_response(&self, json: Value) -> Result<ChatTurn, AgentError> {
        let message = json
            .get("message")
            .ok_or_else(|| AgentError::MalformedResponse("no message in response".to_string()))?;

        let content = message
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let tool_calls = match message.get("tool_calls") {
            None | Some(Value::Null) => Vec::new(),
            Some(calls) => serde_json::from_value(calls.clone())
                .map_err(|e| AgentError::MalformedResponse(format!("bad tool_calls: {e}")))?,
        };

        Ok(ChatTurn {
            content,
            tool_calls,
        })
    }

    /// Send one chat turn and parse the reply.
    pub async fn chat(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<ChatTurn, AgentError> {
        let body = self.build_request_body(messages, tools);

        tracing::debug!(model = %self.config.model, messages = messages.len(), "Ollama chat request");

        let response = self
            .http
            .post(self.chat_url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| AgentError::Http { source: e })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| AgentError::Http { source: e })?;

        self.parse_response(json)
    }
}
