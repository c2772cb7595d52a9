//! Résumé analysis — prompt the completion service and normalize its reply.
//!
//! Flow: validate text → build prompt → one upstream call → strip fences →
//!       parse-or-fallback. Upstream failures propagate; unusable content does not.

pub mod handlers;
pub mod normalize;
pub mod prompts;

use tracing::{info, warn};

use crate::analysis::normalize::normalize_completion;
use crate::analysis::prompts::{build_review_prompt, REVIEW_SYSTEM};
use crate::auth::Identity;
use crate::errors::AppError;
use crate::llm_client::CompletionService;
use crate::models::analysis::AnalysisOutcome;

/// Shortest résumé text (in characters, after trimming) worth sending upstream.
pub const MIN_RESUME_CHARS: usize = 50;

/// Rejects empty or too-short résumé text before anything is sent upstream.
pub fn validate_resume_text(resume_text: &str) -> Result<(), AppError> {
    let length = resume_text.trim().chars().count();
    if length == 0 {
        return Err(AppError::Validation("No resume text provided".to_string()));
    }
    if length < MIN_RESUME_CHARS {
        return Err(AppError::Validation(format!(
            "Resume text must be at least {MIN_RESUME_CHARS} characters"
        )));
    }
    Ok(())
}

/// Reviews `resume_text` for `identity`. Callers validate the text first.
pub async fn analyze(
    identity: &Identity,
    resume_text: &str,
    llm: &dyn CompletionService,
) -> Result<AnalysisOutcome, AppError> {
    let prompt = build_review_prompt(resume_text);
    let completion = llm.complete(&prompt, REVIEW_SYSTEM).await?;

    let outcome = normalize_completion(&completion);
    if outcome.is_fallback() {
        warn!(
            username = %identity.username,
            completion_chars = completion.len(),
            "AI response did not match review schema; returning fallback"
        );
    } else {
        info!(
            username = %identity.username,
            resume_chars = resume_text.len(),
            "resume analyzed"
        );
    }
    Ok(outcome)
}
