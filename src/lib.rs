//! # Quiz Backend
//!
//! Backend for an AI-assisted quiz platform: user, quiz and score records
//! plus a question-generation pipeline built on a chat-completion provider.
//!
//! ## Architecture
//!
//! Layered, leaf-first:
//!
//! ### Capability layer (`services/`)
//! - `LlmService` - the one outbound provider call, behind the `ChatBackend`
//!   seam
//! - `response_parser` - fence stripping, JSON validation, batch shaping
//! - `question_bank` - deterministic fallback templates
//!
//! ### Orchestration layer (`services/question_service`)
//! - `QuestionService` - prompt -> provider -> normalize -> validate, with
//!   any failure degrading to the fallback bank; never fails
//!
//! ### Boundary layers
//! - `store/` - document persistence behind the `DocumentStore` trait
//! - `api/` - axum routes mirroring the original HTTP surface

pub mod api;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{GenerationError, StoreError};
pub use models::Question;
pub use services::{ChatBackend, LlmService, QuestionService};
pub use store::{DocumentStore, MemoryStore};
