use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::json::ApiJson;
use crate::state::AppState;

/// Absent fields deserialize as empty strings and fail validation like blank ones.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub message: String,
    pub token: String,
    pub username: String,
}

/// POST /api/register
pub async fn handle_register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let token = state.auth.register(&req.username, &req.password)?;
    Ok(Json(SessionResponse {
        message: "Registration successful".to_string(),
        token,
        username: req.username.trim().to_string(),
    }))
}

/// POST /api/login
pub async fn handle_login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CredentialsRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let token = state.auth.login(&req.username, &req.password)?;
    Ok(Json(SessionResponse {
        message: "Login successful".to_string(),
        token,
        username: req.username.trim().to_string(),
    }))
}
