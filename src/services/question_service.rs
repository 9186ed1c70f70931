//! Question generation orchestration.
//!
//! One call in, exactly 20 questions out, no matter what the provider does:
//!
//! 1. build the prompt
//! 2. one LLM call (no retries)
//! 3. normalize -> validate -> shape
//! 4. any failure at any stage switches to the fallback question bank

use tracing::{debug, error, info};

use crate::error::GenerationError;
use crate::models::Question;
use crate::services::llm_service::ChatBackend;
use crate::services::question_bank;
use crate::services::response_parser::{self, QUESTION_COUNT};

const SYSTEM_MESSAGE: &str = "You are an expert educator creating quiz questions \
for Ugandan students. Always respond with valid JSON only.";

/// Generation orchestrator.
///
/// Generic over the provider seam so tests can inject deterministic doubles.
pub struct QuestionService<B> {
    backend: B,
    verbose_logging: bool,
}

impl<B: ChatBackend> QuestionService<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            verbose_logging: false,
        }
    }

    /// Log full raw LLM responses at debug level instead of just their
    /// length. Off by default; raw responses can be large.
    pub fn with_verbose_logging(mut self, verbose_logging: bool) -> Self {
        self.verbose_logging = verbose_logging;
        self
    }

    /// Generate exactly [`QUESTION_COUNT`] questions for a subject and level.
    ///
    /// Never fails: a provider error, unparseable response or short batch is
    /// caught here and replaced with fallback content. The caller always
    /// gets a usable batch.
    pub async fn generate(&self, subject: &str, level: &str) -> Vec<Question> {
        match self.generate_with_llm(subject, level).await {
            Ok(questions) => {
                info!(
                    "generated {} questions for {} - {}",
                    questions.len(),
                    subject,
                    level
                );
                questions
            }
            Err(e) => {
                error!("AI generation failed: {}, falling back to sample questions", e);
                question_bank::fallback_questions(subject, level)
            }
        }
    }

    async fn generate_with_llm(
        &self,
        subject: &str,
        level: &str,
    ) -> Result<Vec<Question>, GenerationError> {
        info!("generating questions for {} - {}...", subject, level);

        let prompt = build_prompt(subject, level);
        let raw = self.backend.complete(SYSTEM_MESSAGE, &prompt).await?;

        debug!("raw LLM response length: {} chars", raw.len());
        if self.verbose_logging {
            debug!("raw LLM response: {}", raw);
        }

        let text = response_parser::normalize_response(&raw)?;
        response_parser::validate_and_shape(&text, subject, level)
    }
}

/// The generation instruction: exact count, Ugandan curriculum framing,
/// per-question shape, and a bare-JSON-array output contract.
fn build_prompt(subject: &str, level: &str) -> String {
    format!(
        r#"Generate exactly {count} multiple choice questions for a {level} level {subject} quiz.
The questions should be based on the Ugandan curriculum and context.

Requirements:
- Questions should be appropriate for {level} level students in Uganda
- Include Ugandan examples, places, and context where relevant
- Each question should have 4 options (A, B, C, D)
- Clearly indicate the correct answer
- Questions should be educational and challenging but fair
- Cover different topics within {subject}

Format each question as a JSON object with this structure:
{{
    "question": "Question text here?",
    "options": [
        "A. Option 1",
        "B. Option 2",
        "C. Option 3",
        "D. Option 4"
    ],
    "correct_answer": "A",
    "explanation": "Brief explanation of why this is correct"
}}

Return only a valid JSON array of {count} questions, no additional text."#,
        count = QUESTION_COUNT,
        level = level,
        subject = subject,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Provider double with a canned reply.
    struct StubBackend {
        reply: Option<String>,
    }

    impl StubBackend {
        fn answering(reply: impl Into<String>) -> Self {
            Self {
                reply: Some(reply.into()),
            }
        }

        /// Simulates a transport failure.
        fn failing() -> Self {
            Self { reply: None }
        }
    }

    impl ChatBackend for StubBackend {
        async fn complete(
            &self,
            _system_message: &str,
            _user_message: &str,
        ) -> Result<String, GenerationError> {
            match &self.reply {
                Some(text) => Ok(text.clone()),
                None => Err(GenerationError::EmptyResponse),
            }
        }
    }

    fn questions_json(n: usize) -> String {
        let items: Vec<_> = (0..n)
            .map(|i| {
                json!({
                    "question": format!("Stub question {}?", i),
                    "options": ["A. w", "B. x", "C. y", "D. z"],
                    "correct_answer": "A",
                    "explanation": "w",
                })
            })
            .collect();
        serde_json::to_string(&items).unwrap()
    }

    #[tokio::test]
    async fn uses_llm_content_when_response_is_valid() {
        let service = QuestionService::new(StubBackend::answering(questions_json(20)));
        let batch = service.generate("Science", "medium").await;
        assert_eq!(batch.len(), QUESTION_COUNT);
        assert_eq!(batch[0].question, "Stub question 0?");
        assert!(batch.iter().all(|q| q.subject == "Science"));
    }

    #[tokio::test]
    async fn strips_fences_before_parsing() {
        let fenced = format!("```json\n{}\n```", questions_json(20));
        let service = QuestionService::new(StubBackend::answering(fenced));
        let batch = service.generate("Science", "medium").await;
        assert_eq!(batch[0].question, "Stub question 0?");
    }

    #[tokio::test]
    async fn provider_failure_degrades_to_fallback() {
        let service = QuestionService::new(StubBackend::failing());
        let batch = service.generate("Science", "medium").await;
        assert_eq!(batch.len(), QUESTION_COUNT);
        // Fallback still echoes the request metadata
        assert!(batch.iter().all(|q| q.subject == "Science" && q.difficulty == "medium"));
    }

    #[tokio::test]
    async fn unparseable_response_degrades_to_fallback() {
        let service =
            QuestionService::new(StubBackend::answering("Sure! Here are your questions..."));
        let batch = service.generate("Mathematics", "easy").await;
        assert_eq!(batch, question_bank::fallback_questions("Mathematics", "easy"));
    }

    #[tokio::test]
    async fn short_batch_degrades_to_fallback() {
        let service = QuestionService::new(StubBackend::answering(questions_json(12)));
        let batch = service.generate("English", "hard").await;
        assert_eq!(batch, question_bank::fallback_questions("English", "hard"));
    }

    #[tokio::test]
    async fn oversized_batch_is_truncated_not_discarded() {
        let service = QuestionService::new(StubBackend::answering(questions_json(25)));
        let batch = service.generate("Science", "medium").await;
        assert_eq!(batch.len(), QUESTION_COUNT);
        assert_eq!(batch[19].question, "Stub question 19?");
    }

    #[tokio::test]
    async fn verbose_logging_does_not_affect_the_batch() {
        let quiet = QuestionService::new(StubBackend::answering(questions_json(20)));
        let verbose = QuestionService::new(StubBackend::answering(questions_json(20)))
            .with_verbose_logging(true);

        assert!(verbose.verbose_logging);
        assert_eq!(
            quiet.generate("Science", "medium").await,
            verbose.generate("Science", "medium").await
        );
    }

    #[test]
    fn prompt_names_the_request_and_output_contract() {
        let prompt = build_prompt("Geography", "P.6");
        assert!(prompt.contains("exactly 20 multiple choice questions"));
        assert!(prompt.contains("P.6 level Geography quiz"));
        assert!(prompt.contains("Ugandan curriculum"));
        assert!(prompt.contains("no additional text"));
    }
}
