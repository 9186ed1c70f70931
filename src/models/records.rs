//! Stored record types: users, quizzes, scores.
//!
//! Field names are serialized camelCase to match the wire format the mobile
//! client already reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::question::Question;

/// A registered quiz taker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub display_name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
    pub average_score: f64,
    pub quizzes_taken: u32,
    pub total_score: u32,
    pub achievements: Vec<String>,
    pub preferences: UserPreferences,
}

impl User {
    /// New account with the aggregate fields zeroed.
    pub fn new(
        display_name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            display_name: display_name.into(),
            email: email.into(),
            role: role.into(),
            status: status.into(),
            created_at: now,
            last_login_at: now,
            average_score: 0.0,
            quizzes_taken: 0,
            total_score: 0,
            achievements: Vec::new(),
            preferences: UserPreferences::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    pub categories: Vec<String>,
    pub difficulty: String,
    pub notifications: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            difficulty: "medium".to_string(),
            notifications: true,
        }
    }
}

/// A quiz document. Created with an empty question list; the generation
/// endpoint fills `questions` and flips `status` to "ready".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub title: String,
    pub subject: String,
    pub level: String,
    pub status: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    pub questions_generated: bool,
    pub created_at: DateTime<Utc>,
}

impl Quiz {
    pub fn new(
        title: impl Into<String>,
        subject: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            level: level.into(),
            status: "pending".to_string(),
            questions: Vec::new(),
            questions_generated: false,
            created_at: Utc::now(),
        }
    }
}

/// One completed quiz attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub user_id: String,
    pub quiz_id: String,
    pub score: u32,
    pub total_questions: u32,
    pub completed_at: DateTime<Utc>,
}
