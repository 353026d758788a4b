//! Error types for scene validation.
//!
//! Two kinds are distinguished so that callers (and the agent feedback loop)
//! can react appropriately: input that is not JSON at all, and JSON that
//! violates the scene schema. Schema rejections carry one [`FieldError`] per
//! offending field so an automated caller can self-correct and resubmit.

use serde::Serialize;
use thiserror::Error;

/// A single field-level validation failure: the path to the offending field
/// and what was wrong with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Dotted path to the field, e.g. `elements[2].count`.
    pub path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl FieldError {
    /// Create a field error at the given path.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Error returned when a candidate scene document is rejected.
///
/// Validation is all-or-nothing: no partial scene is ever produced alongside
/// one of these.
#[derive(Error, Debug)]
pub enum SceneError {
    /// The input text is not syntactically valid JSON after fence stripping.
    #[error("scene document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Syntactically valid JSON that violates the scene schema.
    #[error("{count} validation error(s) in scene document")]
    Validation {
        /// Number of field-level failures found.
        count: usize,
        /// Individual failures, in document order.
        errors: Vec<FieldError>,
    },
}

impl SceneError {
    /// Build a schema-violation error from collected field failures.
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation {
            count: errors.len(),
            errors,
        }
    }

    /// Multi-line report naming every failure. Suitable for surfacing back
    /// into an LLM feedback loop or a terminal.
    pub fn report(&self) -> String {
        match self {
            Self::Parse(err) => format!("not valid JSON: {err}"),
            Self::Validation { errors, .. } => {
                let lines: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                lines.join("\n")
            }
        }
    }
}
