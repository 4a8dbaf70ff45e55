//! HTTP error responses.
//!
//! Every failure leaves the API as RFC 7807 problem details.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use graph_service_core::CoreError;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::error;

pub const PROBLEM_JSON: &str = "application/problem+json";

/// Errors raised by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// `:kind` segment that names no subsystem.
    #[error("Unknown algorithm kind: {0}. Available: [\"embeddings\", \"search\", \"similarity\"]")]
    UnknownKind(String),

    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),
}

/// RFC 7807 body.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_uri: String,
    pub title: &'static str,
    pub status: u16,
    pub detail: String,
    pub parameters: Value,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Core(CoreError::UnknownAlgorithm { .. }) | Self::UnknownKind(_) => {
                StatusCode::NOT_FOUND
            }
            Self::Core(CoreError::IntrospectionFailed { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Core(
                CoreError::MissingParameter { .. }
                | CoreError::InvalidParameter { .. }
                | CoreError::InvalidGraph(_)
                | CoreError::DimensionMismatch { .. },
            ) => StatusCode::BAD_REQUEST,
            Self::Core(CoreError::ConfigError(_) | CoreError::Internal(_)) | Self::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Core(e) => e.code(),
            Self::UnknownKind(_) => "unknown_kind",
            Self::Render(_) => "render_failed",
        }
    }

    fn title(&self) -> &'static str {
        match self.status() {
            StatusCode::NOT_FOUND => "Not found",
            StatusCode::UNPROCESSABLE_ENTITY => "Algorithm cannot be described",
            StatusCode::BAD_REQUEST => "Invalid request",
            _ => "Internal server error",
        }
    }

    fn parameters(&self) -> Value {
        match self {
            Self::Core(CoreError::UnknownAlgorithm {
                kind,
                name,
                available,
            }) => json!({ "kind": kind.path_segment(), "name": name, "available": available }),
            Self::Core(CoreError::IntrospectionFailed { kind, name, .. }) => {
                json!({ "kind": kind.path_segment(), "name": name })
            }
            Self::Core(
                CoreError::MissingParameter { name } | CoreError::InvalidParameter { name, .. },
            ) => json!({ "name": name }),
            Self::UnknownKind(kind) => json!({ "kind": kind }),
            _ => json!({}),
        }
    }

    pub fn problem(&self) -> ProblemDetails {
        let status = self.status();
        // Internal details stay in the log.
        let detail = if status.is_server_error() {
            "An unexpected error occurred".to_string()
        } else {
            self.to_string()
        };
        ProblemDetails {
            type_uri: format!("/errors/{}/{}", status.as_u16(), self.code()),
            title: self.title(),
            status: status.as_u16(),
            detail,
            parameters: self.parameters(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let problem = self.problem();
        if problem.status >= 500 {
            error!(error = %self, code = self.code(), "Request failed");
        }

        let mut response = (self.status(), Json(problem)).into_response();
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));
        response
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
