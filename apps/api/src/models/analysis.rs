use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/analyze`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub resume_text: String,
}

/// Structured résumé feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    /// "X/10", or "N/A" on the fallback record.
    pub score: String,
    /// Unparsed completion text; only present on the fallback record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl AnalysisResult {
    /// The degraded record returned when the model's reply cannot be used.
    pub fn fallback(raw_response: impl Into<String>) -> Self {
        Self {
            strengths: vec!["Unable to parse AI response".to_string()],
            weaknesses: vec!["Please try again".to_string()],
            suggestions: vec!["Upload resume again".to_string()],
            score: "N/A".to_string(),
            raw_response: Some(raw_response.into()),
        }
    }
}

/// What `/api/analyze` returns with HTTP 200.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    /// The model's object, passed through as-is.
    Parsed(Value),
    Fallback(AnalysisResult),
}

impl AnalysisOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, AnalysisOutcome::Fallback(_))
    }
}
