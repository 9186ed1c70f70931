//! HTTP surface.
//!
//! Thin axum layer over the store and the generation orchestrator. Routes
//! and response envelopes match what the mobile client already consumes.

pub mod handlers;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use thiserror::Error;

use crate::error::StoreError;
use crate::services::{LlmService, QuestionService};
use crate::store::DocumentStore;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub questions: Arc<QuestionService<LlmService>>,
}

/// Errors surfaced to HTTP clients. Generation failures never appear here;
/// the orchestrator absorbs them.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(StoreError::NotFound { .. }) => StatusCode::NOT_FOUND,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/users", get(handlers::get_users).post(handlers::create_user))
        .route(
            "/users/:id",
            put(handlers::update_user).delete(handlers::delete_user),
        )
        .route("/quizzes", get(handlers::get_quizzes).post(handlers::create_quiz))
        .route("/quizzes/:id", delete(handlers::delete_quiz))
        .route("/scores", get(handlers::get_scores).post(handlers::create_score))
        .route("/generate-questions", post(handlers::generate_questions))
        .with_state(state)
}
