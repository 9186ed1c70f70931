//! Response normalization and validation.
//!
//! Turns the raw text the LLM returns into exactly [`QUESTION_COUNT`] shaped
//! [`Question`] records, or reports why it cannot. Pipeline order:
//!
//! 1. `normalize_response` - strip markdown code fences, trim
//! 2. `validate_and_shape` - parse, enforce the count floor, truncate,
//!    harden per-question shape, assign ids and request metadata

use tracing::{debug, warn};

use crate::error::GenerationError;
use crate::models::{DraftQuestion, Question};

/// Number of questions in every generated batch.
pub const QUESTION_COUNT: usize = 20;

/// Best-effort textual cleanup of the raw provider output.
///
/// The provider sometimes wraps the JSON array in markdown code fences even
/// when told not to. Strips a leading ```` ```json ```` (or bare ```` ``` ````)
/// marker and a trailing ```` ``` ```` marker, then trims whitespace. No
/// structural validation happens here.
pub fn normalize_response(raw: &str) -> Result<String, GenerationError> {
    let mut text = raw.trim();

    if text.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    if let Some(stripped) = text.strip_prefix("```json") {
        text = stripped;
    } else if let Some(stripped) = text.strip_prefix("```") {
        text = stripped;
    }
    if let Some(stripped) = text.strip_suffix("```") {
        text = stripped;
    }

    Ok(text.trim().to_string())
}

/// Parse normalized text into a shaped question batch.
///
/// - parse failure propagates as [`GenerationError::ParseFailed`]
/// - fewer than [`QUESTION_COUNT`] elements is a hard floor
///   ([`GenerationError::InsufficientCount`]); partial batches are never
///   topped up
/// - more than [`QUESTION_COUNT`] elements keeps the first
///   [`QUESTION_COUNT`] in their original order
/// - ids are assigned 1-based in output order; `difficulty` and `subject`
///   always come from the caller, never from the provider
pub fn validate_and_shape(
    text: &str,
    subject: &str,
    level: &str,
) -> Result<Vec<Question>, GenerationError> {
    let drafts: Vec<DraftQuestion> = serde_json::from_str(text).map_err(|e| {
        warn!("failed to parse LLM response as a question array: {}", e);
        e
    })?;

    debug!("parsed {} questions from LLM response", drafts.len());

    if drafts.len() < QUESTION_COUNT {
        warn!(
            "only got {} questions, expected at least {}",
            drafts.len(),
            QUESTION_COUNT
        );
        return Err(GenerationError::InsufficientCount {
            expected: QUESTION_COUNT,
            got: drafts.len(),
        });
    }

    if drafts.len() > QUESTION_COUNT {
        debug!(
            "got {} questions, keeping the first {}",
            drafts.len(),
            QUESTION_COUNT
        );
    }

    let mut questions = Vec::with_capacity(QUESTION_COUNT);
    for (index, draft) in drafts.into_iter().take(QUESTION_COUNT).enumerate() {
        check_shape(&draft, index)?;
        questions.push(Question {
            id: (index + 1) as u32,
            question: draft.question,
            options: draft.options,
            correct_answer: draft.correct_answer,
            explanation: draft.explanation,
            difficulty: level.to_string(),
            subject: subject.to_string(),
        });
    }

    Ok(questions)
}

/// Per-question hardening checks: exactly 4 options, a valid answer label,
/// non-empty question text.
fn check_shape(draft: &DraftQuestion, index: usize) -> Result<(), GenerationError> {
    if draft.question.trim().is_empty() {
        return Err(GenerationError::MalformedQuestion {
            index,
            reason: "question text is empty",
        });
    }
    if draft.options.len() != 4 {
        return Err(GenerationError::MalformedQuestion {
            index,
            reason: "expected exactly 4 options",
        });
    }
    if !matches!(draft.correct_answer.as_str(), "A" | "B" | "C" | "D") {
        return Err(GenerationError::MalformedQuestion {
            index,
            reason: "correct_answer must be one of A, B, C, D",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Build a valid JSON array of `n` well-formed questions.
    fn questions_json(n: usize) -> String {
        let items: Vec<_> = (0..n)
            .map(|i| {
                json!({
                    "question": format!("Sample question {}?", i),
                    "options": ["A. one", "B. two", "C. three", "D. four"],
                    "correct_answer": "B",
                    "explanation": "two is correct",
                })
            })
            .collect();
        serde_json::to_string(&items).unwrap()
    }

    #[test]
    fn normalize_strips_json_fences() {
        let fenced = format!("```json\n{}\n```", questions_json(20));
        let cleaned = normalize_response(&fenced).unwrap();
        assert!(cleaned.starts_with('['));
        assert!(cleaned.ends_with(']'));
        // Still parses as the same structured data
        assert_eq!(
            validate_and_shape(&cleaned, "Science", "medium")
                .unwrap()
                .len(),
            QUESTION_COUNT
        );
    }

    #[test]
    fn normalize_strips_bare_fences() {
        let cleaned = normalize_response("```\n[1, 2]\n```").unwrap();
        assert_eq!(cleaned, "[1, 2]");
    }

    #[test]
    fn normalize_rejects_empty_input() {
        assert!(matches!(
            normalize_response("   \n  "),
            Err(GenerationError::EmptyResponse)
        ));
        assert!(matches!(
            normalize_response(""),
            Err(GenerationError::EmptyResponse)
        ));
    }

    #[test]
    fn normalize_leaves_unfenced_text_alone() {
        let text = questions_json(20);
        assert_eq!(normalize_response(&text).unwrap(), text);
    }

    #[test]
    fn shape_assigns_dense_ids_and_metadata() {
        let questions = validate_and_shape(&questions_json(20), "History", "hard").unwrap();
        assert_eq!(questions.len(), QUESTION_COUNT);
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.id, (i + 1) as u32);
            assert_eq!(q.subject, "History");
            assert_eq!(q.difficulty, "hard");
            assert_eq!(q.options.len(), 4);
        }
    }

    #[test]
    fn shape_truncates_extra_questions_stably() {
        let questions = validate_and_shape(&questions_json(25), "Science", "easy").unwrap();
        assert_eq!(questions.len(), QUESTION_COUNT);
        // The kept elements are positions 0-19 of the input, in order
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.question, format!("Sample question {}?", i));
        }
    }

    #[test]
    fn shape_rejects_short_batches() {
        assert!(matches!(
            validate_and_shape(&questions_json(19), "Science", "easy"),
            Err(GenerationError::InsufficientCount { got: 19, .. })
        ));
    }

    #[test]
    fn short_batch_error_reports_the_batch_size() {
        let err = validate_and_shape(&questions_json(5), "Science", "easy").unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("expected at least {} questions, got 5", QUESTION_COUNT)
        );
    }

    #[test]
    fn shape_rejects_invalid_json() {
        assert!(matches!(
            validate_and_shape("this is not json", "Science", "easy"),
            Err(GenerationError::ParseFailed(_))
        ));
    }

    #[test]
    fn shape_rejects_missing_fields() {
        // 20 objects but none carry the required fields
        let text = serde_json::to_string(&vec![json!({"question": "q?"}); 20]).unwrap();
        assert!(matches!(
            validate_and_shape(&text, "Science", "easy"),
            Err(GenerationError::ParseFailed(_))
        ));
    }

    #[test]
    fn shape_rejects_wrong_option_count() {
        let mut items: Vec<serde_json::Value> =
            serde_json::from_str(&questions_json(20)).unwrap();
        items[3]["options"] = json!(["A. one", "B. two"]);
        let text = serde_json::to_string(&items).unwrap();
        assert!(matches!(
            validate_and_shape(&text, "Science", "easy"),
            Err(GenerationError::MalformedQuestion { index: 3, .. })
        ));
    }

    #[test]
    fn shape_rejects_invalid_answer_label() {
        let mut items: Vec<serde_json::Value> =
            serde_json::from_str(&questions_json(20)).unwrap();
        items[0]["correct_answer"] = json!("E");
        let text = serde_json::to_string(&items).unwrap();
        assert!(matches!(
            validate_and_shape(&text, "Science", "easy"),
            Err(GenerationError::MalformedQuestion { index: 0, .. })
        ));
    }

    #[test]
    fn metadata_propagates_special_characters() {
        let questions =
            validate_and_shape(&questions_json(20), "Ssematimba's \"P.7\"", "").unwrap();
        assert!(questions
            .iter()
            .all(|q| q.subject == "Ssematimba's \"P.7\"" && q.difficulty.is_empty()));
    }
}
