use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;
use crate::extraction::ExtractError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Upstream error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Upstream returned no completion text")]
    EmptyUpstreamResponse,

    #[error("Misconfiguration: {0}")]
    Misconfiguration(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidInput(msg) => AppError::Validation(msg),
            AuthError::Conflict(username) => {
                AppError::Conflict(format!("Username '{username}' already exists"))
            }
            AuthError::Unauthorized(msg) => AppError::Unauthorized(msg),
            AuthError::Signing(e) => AppError::Internal(e.into()),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Api { status, body } => AppError::Upstream { status, body },
            LlmError::EmptyContent => AppError::EmptyUpstreamResponse,
            other => AppError::Internal(anyhow::Error::new(other)),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
            AppError::Upstream { status, body } => {
                tracing::error!("Upstream AI service returned {status}: {body}");
                let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY);
                let body = Json(json!({
                    "error": "AI service request failed",
                    "code": "UPSTREAM_ERROR",
                    "status": status.as_u16(),
                    "details": body,
                }));
                return (status, body).into_response();
            }
            AppError::EmptyUpstreamResponse => {
                tracing::error!("Upstream AI service returned no completion text");
                (
                    StatusCode::BAD_GATEWAY,
                    "EMPTY_UPSTREAM_RESPONSE",
                    "AI service returned an empty response".to_string(),
                )
            }
            AppError::Misconfiguration(msg) => {
                tracing::error!("Misconfiguration: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MISCONFIGURATION",
                    msg.clone(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}
