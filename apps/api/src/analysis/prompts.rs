// Prompt constants for résumé review.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// System instruction for résumé review.
pub const REVIEW_SYSTEM: &str = JSON_ONLY_SYSTEM;

/// Review prompt template. Replace `{resume_text}` before sending.
pub const REVIEW_PROMPT_TEMPLATE: &str = r#"You are an HR expert. Review the following resume and respond ONLY with a JSON object in this EXACT format (no explanations, no markdown, no extra keys):
{
  "strengths": ["point1", "point2"],
  "weaknesses": ["point1", "point2"],
  "suggestions": ["point1", "point2"],
  "score": "X/10"
}

Rules:
- "strengths", "weaknesses" and "suggestions" are arrays of short strings.
- "score" is a string of the form "X/10" where X is an integer from 0 to 10.

Resume:

{resume_text}"#;

/// Builds the review prompt with the résumé text embedded verbatim.
pub fn build_review_prompt(resume_text: &str) -> String {
    REVIEW_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}
