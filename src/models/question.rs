use serde::{Deserialize, Serialize};

/// A fully shaped quiz question, ready to persist.
///
/// Invariants for a generated batch:
/// - `id` is 1-based and dense within the batch (1..=20)
/// - `options` holds exactly 4 labeled choices ("A." through "D.")
/// - `correct_answer` is one of "A", "B", "C", "D"
/// - `difficulty` and `subject` echo the request verbatim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub difficulty: String,
    pub subject: String,
}

/// The shape the LLM is instructed to emit, before ids and request metadata
/// are assigned. Missing fields are rejected at parse time; extra fields the
/// model invents (its own ids, difficulty labels) are dropped here and
/// replaced with caller-supplied values during shaping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}
