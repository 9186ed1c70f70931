pub mod llm_service;
pub mod question_bank;
pub mod question_service;
pub mod response_parser;

pub use llm_service::{ChatBackend, LlmService};
pub use question_service::QuestionService;
