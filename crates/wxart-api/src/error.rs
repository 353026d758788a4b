//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps scene, weather, and agent errors to HTTP status codes and returns
//! JSON error bodies with an error code, message, and optional details.
//! Internal error messages are never exposed to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use wxart_agent::AgentError;
use wxart_meteo::MeteoError;
use wxart_scene::SceneError;

/// Structured JSON error response body.
///
/// All error responses use this format. The `details` field carries the
/// per-field failures for 422 scene rejections and is omitted otherwise.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details, present only for validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Request or scene validation failed (422).
    #[error("validation error: {message}")]
    Validation {
        /// What failed.
        message: String,
        /// Per-field failures, when available.
        details: Option<serde_json::Value>,
    },

    /// Request body could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// An upstream dependency (Ollama or Open-Meteo) failed (502).
    #[error("upstream error: {0}")]
    Upstream(String),

    /// A required component is not configured (503).
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// Internal server error (500). Message is logged but not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Shorthand for a validation error without details.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            details: None,
        }
    }

    /// Return the HTTP status code and machine-readable error code.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            Self::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        }

        let details = match self {
            Self::Validation { details, .. } => details,
            _ => None,
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Scene rejections map per kind: parse errors are client syntax errors,
/// schema errors carry the per-field diagnostics.
impl From<SceneError> for AppError {
    fn from(err: SceneError) -> Self {
        match err {
            SceneError::Parse(_) => Self::BadRequest(err.to_string()),
            SceneError::Validation { ref errors, .. } => Self::Validation {
                message: err.to_string(),
                details: serde_json::to_value(errors).ok(),
            },
        }
    }
}

/// Weather client errors: an unknown city is the caller's problem, anything
/// else is an upstream failure.
impl From<MeteoError> for AppError {
    fn from(err: MeteoError) -> Self {
        match err {
            MeteoError::CityNotFound(_) => Self::NotFound(err.to_string()),
            other => Self::Upstream(other.to_string()),
        }
    }
}

/// Agent errors surface as upstream failures; the agent already embeds the
/// underlying cause (including scene rejections it could not correct).
impl From<AgentError> for AppError {
    fn from(err: AgentError) -> Self {
        Self::Upstream(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxart_scene::FieldError;

    #[test]
    fn not_found_status_code() {
        let err = AppError::NotFound("city not found: Xyzzy".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "NOT_FOUND");
    }

    #[test]
    fn validation_status_code() {
        let err = AppError::validation("bad field");
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, "VALIDATION_ERROR");
    }

    #[test]
    fn bad_request_status_code() {
        let err = AppError::BadRequest("malformed JSON".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "BAD_REQUEST");
    }

    #[test]
    fn upstream_status_code() {
        let err = AppError::Upstream("Ollama returned 500".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "UPSTREAM_ERROR");
    }

    #[test]
    fn unavailable_status_code() {
        let err = AppError::Unavailable("scene agent is not configured".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(code, "SERVICE_UNAVAILABLE");
    }

    #[test]
    fn internal_status_code() {
        let err = AppError::Internal("boom".to_string());
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "INTERNAL_ERROR");
    }

    #[test]
    fn scene_parse_error_is_bad_request() {
        let parse = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let err = AppError::from(SceneError::from(parse));
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn scene_schema_error_carries_details() {
        let scene_err = SceneError::validation(vec![FieldError::new(
            "elements[0].type",
            "unknown element type \"hexagon\"",
        )]);
        let err = AppError::from(scene_err);
        match err {
            AppError::Validation { details, .. } => {
                let details = details.expect("details should be present");
                assert_eq!(details[0]["path"], "elements[0].type");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn city_not_found_maps_to_404() {
        let err = AppError::from(MeteoError::CityNotFound("Xyzzy".to_string()));
        let (status, _) = err.status_and_code();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn agent_errors_map_to_502() {
        let err = AppError::from(AgentError::ToolLoopLimit { turns: 12 });
        let (status, code) = err.status_and_code();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "UPSTREAM_ERROR");
    }

    #[test]
    fn error_body_skips_absent_details() {
        let body = ErrorBody {
            error: ErrorDetail {
                code: "TEST".to_string(),
                message: "test message".to_string(),
                details: None,
            },
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("TEST"));
        assert!(!json.contains("details"));
    }

    // ── into_response tests ──────────────────────────────────────

    use http_body_util::BodyExt;

    async fn response_parts(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn into_response_validation_includes_details() {
        let scene_err = SceneError::validation(vec![FieldError::new("scene", "missing")]);
        let (status, body) = response_parts(AppError::from(scene_err)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        assert!(body.error.details.is_some());
    }

    #[tokio::test]
    async fn into_response_internal_hides_details() {
        let (status, body) = response_parts(AppError::Internal("db exploded".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.message, "An internal error occurred");
        assert!(
            !body.error.message.contains("db exploded"),
            "internal error details must not leak"
        );
    }

    #[tokio::test]
    async fn into_response_not_found() {
        let (status, body) = response_parts(AppError::NotFound("city not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.error.message.contains("city not found"));
        assert!(body.error.details.is_none());
    }
}
