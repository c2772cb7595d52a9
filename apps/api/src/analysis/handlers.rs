use axum::{extract::State, Json};

use crate::analysis::{analyze, validate_resume_text};
use crate::auth::extractor::AuthUser;
use crate::errors::AppError;
use crate::json::ApiJson;
use crate::models::analysis::{AnalysisOutcome, AnalysisRequest};
use crate::state::AppState;

/// POST /api/analyze
///
/// Answers 200 with either the model's review or the fallback record.
/// Auth, input, config, and upstream failures are the only non-200 paths.
pub async fn handle_analyze(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    ApiJson(request): ApiJson<AnalysisRequest>,
) -> Result<Json<AnalysisOutcome>, AppError> {
    validate_resume_text(&request.resume_text)?;

    let llm = state.llm.as_ref().ok_or_else(|| {
        AppError::Misconfiguration("GOOGLE_API_KEY is not configured".to_string())
    })?;

    let outcome = analyze(&identity, &request.resume_text, llm.as_ref()).await?;
    Ok(Json(outcome))
}
