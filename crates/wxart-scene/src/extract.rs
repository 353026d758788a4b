//! Extraction of JSON from model output.
//!
//! Language models frequently wrap their final answer in markdown code
//! fences despite instructions not to. The helpers here strip a leading
//! fence (with optional `json` language tag), a trailing fence, and
//! surrounding whitespace before handing the remainder to the JSON parser.

use serde_json::Value;

/// Strip surrounding markdown code fences and whitespace from `text`.
///
/// Handles ```` ```json ... ``` ````, bare ```` ``` ... ``` ````, and
/// unfenced input alike. Fences inside the body are left untouched.
pub fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        body = rest.trim_start();
    }
    if let Some(rest) = body.strip_suffix("```") {
        body = rest.trim_end();
    }
    body
}

/// Parse `text` as JSON after stripping code fences.
pub fn extract_json(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(strip_code_fences(text))
}
