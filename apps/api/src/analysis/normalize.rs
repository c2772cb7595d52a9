//! Turns raw completion text into an `AnalysisOutcome`.
//!
//! A reply the model mangled is never an error: it degrades to the fallback record.

use serde::Deserialize;
use serde_json::Value;

use crate::llm_client::strip_json_fences;
use crate::models::analysis::{AnalysisOutcome, AnalysisResult};

pub fn normalize_completion(completion: &str) -> AnalysisOutcome {
    let cleaned = strip_json_fences(completion);

    match serde_json::from_str::<Value>(cleaned) {
        Ok(value) if has_review_shape(&value) => AnalysisOutcome::Parsed(value),
        _ => AnalysisOutcome::Fallback(AnalysisResult::fallback(completion)),
    }
}

/// True when `value` is an object whose four review keys have the expected types.
/// Extra keys are allowed and passed through untouched.
fn has_review_shape(value: &Value) -> bool {
    value.is_object() && AnalysisResult::deserialize(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_json_is_parsed() {
        let completion = "```json\n{\"strengths\":[\"a\"],\"weaknesses\":[\"b\"],\"suggestions\":[\"c\"],\"score\":\"7/10\"}\n```";
        match normalize_completion(completion) {
            AnalysisOutcome::Parsed(value) => {
                assert_eq!(value["score"], "7/10");
                assert_eq!(value["strengths"][0], "a");
            }
            other => panic!("expected parsed outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_reply_with_only_closing_fence_is_parsed() {
        let completion = "{\"strengths\":[\"a\"],\"weaknesses\":[],\"suggestions\":[],\"score\":\"6/10\"}\n```";
        match normalize_completion(completion) {
            AnalysisOutcome::Parsed(value) => assert_eq!(value["score"], "6/10"),
            other => panic!("expected parsed outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_unparsable_text_falls_back() {
        match normalize_completion("not json") {
            AnalysisOutcome::Fallback(result) => {
                assert_eq!(result.score, "N/A");
                assert_eq!(result.raw_response.as_deref(), Some("not json"));
            }
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_key_falls_back() {
        let completion = r#"{"strengths":["a"],"weaknesses":["b"],"score":"7/10"}"#;
        assert!(normalize_completion(completion).is_fallback());
    }

    #[test]
    fn test_wrongly_typed_key_falls_back() {
        let completion = r#"{"strengths":["a"],"weaknesses":["b"],"suggestions":["c"],"score":7}"#;
        assert!(normalize_completion(completion).is_fallback());
    }

    #[test]
    fn test_non_object_json_falls_back() {
        assert!(normalize_completion("[1, 2, 3]").is_fallback());
        assert!(normalize_completion("\"just a string\"").is_fallback());
    }

    #[test]
    fn test_extra_keys_are_preserved() {
        let completion = r#"{"strengths":[],"weaknesses":[],"suggestions":[],"score":"5/10","summary":"ok"}"#;
        match normalize_completion(completion) {
            AnalysisOutcome::Parsed(value) => assert_eq!(value["summary"], "ok"),
            other => panic!("expected parsed outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_fallback_keeps_text_as_received() {
        match normalize_completion("```json\n{broken\n```") {
            AnalysisOutcome::Fallback(result) => {
                assert_eq!(result.raw_response.as_deref(), Some("```json\n{broken\n```"));
            }
            other => panic!("expected fallback, got {other:?}"),
        }
    }
}
