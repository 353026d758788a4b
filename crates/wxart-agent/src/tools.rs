//! Tool definitions the agent exposes to the model.
//!
//! Parameters are plain JSON Schema fragments, converted to Ollama's
//! function-calling format when a request is built.

use serde_json::Value;

use crate::ToolDefinition;

/// Tools for the scene-generation agent: weather lookup plus the scene
/// format reference and validator.
pub fn scene_tools() -> Vec<ToolDefinition> {
    let mut tools = reporter_tools();
    tools.push(ToolDefinition {
        name: "get_scene_format".to_string(),
        description: "Get the scene JSON format, element types, particle presets, and \
                      artistic guidelines. Call this BEFORE generating your scene JSON."
            .to_string(),
        parameters: serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        }),
    });
    tools.push(ToolDefinition {
        name: "validate_scene".to_string(),
        description: "Validate a scene JSON string against the schema. Call this with your \
                      generated scene JSON before returning it as your final answer. If \
                      validation fails, the error message will tell you what to fix."
            .to_string(),
        parameters: serde_json::json!({
            "type": "object",
            "properties": {
                "scene_json": {
                    "type": "string",
                    "description": "The complete scene JSON string to validate"
                }
            },
            "required": ["scene_json"]
        }),
    });
    tools
}

/// Tools for the weather-reporter agent: geocoding and current conditions.
pub fn reporter_tools() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "geocode_location".to_string(),
            description: "Look up geographic coordinates for a city name.".to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "city_name": {
                        "type": "string",
                        "description": "The name of the city to geocode (e.g. \"Berlin\", \"Tokyo\")"
                    }
                },
                "required": ["city_name"]
            }),
        },
        ToolDefinition {
            name: "get_weather".to_string(),
            description: "Get current weather conditions for geographic coordinates.".to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "latitude": {
                        "type": "number",
                        "description": "The latitude of the location"
                    },
                    "longitude": {
                        "type": "number",
                        "description": "The longitude of the location"
                    }
                },
                "required": ["latitude", "longitude"]
            }),
        },
    ]
}

/// Convert a tool definition to the Ollama function-calling format.
pub fn to_ollama_tool(tool: &ToolDefinition) -> Value {
    serde_json::json!({
        "type": "function",
        "function": {
            "name": tool.name,
            "description": tool.description,
            "parameters": tool.parameters,
        }
    })
}
