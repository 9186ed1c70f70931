//! Request handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use chrono::Utc;

use crate::api::{ApiError, AppState};
use crate::models::{Quiz, Score, User};
use crate::store::UserUpdate;

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy", "message": "Quiz API is running" }))
}

// ========== users ==========

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

pub async fn get_users(State(state): State<AppState>) -> Json<Value> {
    let users = state.store.list_users();
    info!("found {} users", users.len());

    Json(json!({
        "success": true,
        "count": users.len(),
        "users": users,
    }))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<Json<Value>, ApiError> {
    let name = body.name.ok_or(ApiError::MissingField("name"))?;
    let email = body.email.ok_or(ApiError::MissingField("email"))?;

    let user = User::new(
        name,
        email,
        body.role.unwrap_or_else(|| "user".to_string()),
        body.status.unwrap_or_else(|| "active".to_string()),
    );
    let user_id = state.store.create_user(user);
    info!("user created with id: {}", user_id);

    Ok(Json(json!({
        "success": true,
        "message": "User created successfully",
        "user_id": user_id,
    })))
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<Value>, ApiError> {
    state.store.update_user(
        &id,
        UserUpdate {
            display_name: body.name,
            email: body.email,
            role: body.role,
            status: body.status,
        },
    )?;
    info!("user {} updated", id);

    Ok(Json(json!({
        "success": true,
        "message": "User updated successfully",
    })))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.store.delete_user(&id)?;
    info!("user {} deleted", id);

    Ok(Json(json!({
        "success": true,
        "message": "User deleted successfully",
    })))
}

// ========== quizzes ==========

#[derive(Debug, Deserialize)]
pub struct CreateQuizRequest {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub level: Option<String>,
}

pub async fn get_quizzes(State(state): State<AppState>) -> Json<Value> {
    let quizzes = state.store.list_quizzes();
    info!("found {} quizzes", quizzes.len());
    Json(json!(quizzes))
}

pub async fn create_quiz(
    State(state): State<AppState>,
    Json(body): Json<CreateQuizRequest>,
) -> Result<Json<Value>, ApiError> {
    let title = body.title.ok_or(ApiError::MissingField("title"))?;
    let subject = body.subject.ok_or(ApiError::MissingField("subject"))?;
    let level = body.level.ok_or(ApiError::MissingField("level"))?;

    let quiz_id = state.store.create_quiz(Quiz::new(title, subject, level));
    info!("quiz created with id: {}", quiz_id);

    Ok(Json(json!({
        "success": true,
        "message": "Quiz created successfully",
        "quiz_id": quiz_id,
    })))
}

pub async fn delete_quiz(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.store.delete_quiz(&id)?;
    info!("quiz {} deleted", id);

    Ok(Json(json!({
        "success": true,
        "message": "Quiz deleted successfully",
    })))
}

// ========== scores ==========

#[derive(Debug, Deserialize)]
pub struct CreateScoreRequest {
    pub user_id: Option<String>,
    pub quiz_id: Option<String>,
    pub score: Option<u32>,
    pub total_questions: Option<u32>,
}

pub async fn get_scores(State(state): State<AppState>) -> Json<Value> {
    let scores = state.store.list_scores();
    info!("found {} scores", scores.len());
    Json(json!(scores))
}

pub async fn create_score(
    State(state): State<AppState>,
    Json(body): Json<CreateScoreRequest>,
) -> Result<Json<Value>, ApiError> {
    let score = Score {
        user_id: body.user_id.ok_or(ApiError::MissingField("user_id"))?,
        quiz_id: body.quiz_id.ok_or(ApiError::MissingField("quiz_id"))?,
        score: body.score.ok_or(ApiError::MissingField("score"))?,
        total_questions: body
            .total_questions
            .ok_or(ApiError::MissingField("total_questions"))?,
        completed_at: Utc::now(),
    };

    let score_id = state.store.create_score(score);
    info!("score recorded with id: {}", score_id);

    Ok(Json(json!({
        "success": true,
        "message": "Score recorded successfully",
        "score_id": score_id,
    })))
}

// ========== question generation ==========

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub quiz_id: Option<String>,
    pub subject: Option<String>,
    pub level: Option<String>,
}

/// Generate a question batch for a quiz and persist it.
///
/// The generation call itself cannot fail (it degrades to fallback content);
/// the only error paths here are request validation and a missing quiz.
pub async fn generate_questions(
    State(state): State<AppState>,
    Json(body): Json<GenerateQuestionsRequest>,
) -> Result<Json<Value>, ApiError> {
    let quiz_id = body.quiz_id.ok_or(ApiError::MissingField("quiz_id"))?;
    let subject = body.subject.ok_or(ApiError::MissingField("subject"))?;
    let level = body.level.ok_or(ApiError::MissingField("level"))?;

    info!("processing quiz {}: {} - {}", quiz_id, subject, level);

    let questions = state.questions.generate(&subject, &level).await;
    let count = questions.len();

    state.store.set_quiz_questions(&quiz_id, questions)?;
    info!("stored {} questions on quiz {}", count, quiz_id);

    Ok(Json(json!({
        "success": true,
        "message": "Questions generated successfully",
        "questions_count": count,
    })))
}
