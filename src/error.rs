//! Application error types.

use thiserror::Error;

/// Errors raised inside the question-generation pipeline.
///
/// None of these escape [`QuestionService::generate`]; every variant is
/// recovered at the orchestrator boundary by switching to the fallback
/// question bank.
///
/// [`QuestionService::generate`]: crate::services::QuestionService::generate
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The provider returned no usable text.
    #[error("LLM returned an empty response")]
    EmptyResponse,

    /// The normalized response is not a valid JSON question array.
    #[error("LLM response is not a valid question array: {0}")]
    ParseFailed(#[from] serde_json::Error),

    /// Fewer than the required number of questions were returned. Partial
    /// batches are never topped up.
    #[error("expected at least {expected} questions, got {got}")]
    InsufficientCount { expected: usize, got: usize },

    /// A parsed question fails the per-question shape checks.
    #[error("question at index {index} is malformed: {reason}")]
    MalformedQuestion { index: usize, reason: &'static str },

    /// Transport or API failure from the chat-completion provider.
    #[error("LLM API call failed: {0}")]
    Provider(#[from] async_openai::error::OpenAIError),
}

/// Errors from the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{collection} document not found: {id}")]
    NotFound { collection: &'static str, id: String },
}
