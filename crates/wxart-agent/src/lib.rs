//! # wxart-agent — LLM Scene-Generation Agent
//!
//! Drives an Ollama-served model to produce weather-art scenes:
//!
//! - **Tool calling.** The model is given geocoding, current-weather, scene
//!   format, and scene validation tools; the agent executes calls and feeds
//!   results back until the model produces a final answer.
//! - **Validated output.** The final answer is fence-stripped and run
//!   through the scene validator; only a canonical, fully-resolved scene is
//!   ever returned to the caller.
//! - **Self-correction.** Tool failures (including validation rejections)
//!   are returned to the model as error text so it can fix its output and
//!   try again within the same conversation.

pub mod agent;
pub mod config;
pub mod error;
pub mod ollama;
pub mod prompts;
pub mod tools;

pub use agent::SceneAgent;
pub use config::AgentConfig;
pub use error::AgentError;
pub use ollama::{ChatTurn, OllamaClient};

use serde::{Deserialize, Serialize};

/// One chat message in an Ollama conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Tool calls the assistant requested, echoed back in the history.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tool_calls: Option<Vec<ToolCall>>,
}

impl Message {
    /// Build a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            tool_calls: None,
        }
    }

    /// Build a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            tool_calls: None,
        }
    }

    /// Build an assistant message, keeping any tool calls it made.
    pub fn assistant(content: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            tool_calls: if tool_calls.is_empty() {
                None
            } else {
                Some(tool_calls)
            },
        }
    }

    /// Build a tool-result message.
    pub fn tool(content: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: content.into(),
            tool_calls: None,
        }
    }
}

/// Chat role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// A tool the model may call, with JSON Schema parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

/// A tool call requested by the model, in Ollama's wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub function: FunctionCall,
}

/// The function name and arguments inside a tool call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(serde_json::to_value(Role::System).unwrap(), "system");
        assert_eq!(serde_json::to_value(Role::Tool).unwrap(), "tool");
    }

    #[test]
    fn plain_messages_omit_tool_calls() {
        let value = serde_json::to_value(Message::user("hello")).unwrap();
        assert_eq!(value["role"], "user");
        assert_eq!(value["content"], "hello");
        assert!(value.get("tool_calls").is_none());
    }

    #[test]
    fn assistant_message_keeps_tool_calls() {
        let calls = vec![ToolCall {
            function: FunctionCall {
                name: "get_weather".to_string(),
                arguments: serde_json::json!({"latitude": 52.52, "longitude": 13.41}),
            },
        }];
        let value = serde_json::to_value(Message::assistant("", calls)).unwrap();
        assert_eq!(value["tool_calls"][0]["function"]["name"], "get_weather");
    }

    #[test]
    fn assistant_message_with_no_calls_omits_the_field() {
        let value = serde_json::to_value(Message::assistant("done", Vec::new())).unwrap();
        assert!(value.get("tool_calls").is_none());
    }
}
