//! In-process document store.

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{Question, Quiz, Score, User};
use crate::store::{Document, DocumentStore, UserUpdate};

/// HashMap-backed store. Each collection sits behind its own lock; locks are
/// held only for the duration of one operation.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    quizzes: RwLock<HashMap<String, Quiz>>,
    scores: RwLock<HashMap<String, Score>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn new_id() -> String {
        Uuid::new_v4().to_string()
    }
}

impl DocumentStore for MemoryStore {
    fn list_users(&self) -> Vec<Document<User>> {
        self.users
            .read()
            .expect("users lock poisoned")
            .iter()
            .map(|(id, user)| Document {
                id: id.clone(),
                data: user.clone(),
            })
            .collect()
    }

    fn create_user(&self, user: User) -> String {
        let id = Self::new_id();
        self.users
            .write()
            .expect("users lock poisoned")
            .insert(id.clone(), user);
        id
    }

    fn update_user(&self, id: &str, update: UserUpdate) -> Result<(), StoreError> {
        let mut users = self.users.write().expect("users lock poisoned");
        let user = users.get_mut(id).ok_or_else(|| StoreError::NotFound {
            collection: "users",
            id: id.to_string(),
        })?;

        if let Some(display_name) = update.display_name {
            user.display_name = display_name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(status) = update.status {
            user.status = status;
        }
        Ok(())
    }

    fn delete_user(&self, id: &str) -> Result<(), StoreError> {
        self.users
            .write()
            .expect("users lock poisoned")
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                collection: "users",
                id: id.to_string(),
            })
    }

    fn list_quizzes(&self) -> Vec<Document<Quiz>> {
        self.quizzes
            .read()
            .expect("quizzes lock poisoned")
            .iter()
            .map(|(id, quiz)| Document {
                id: id.clone(),
                data: quiz.clone(),
            })
            .collect()
    }

    fn create_quiz(&self, quiz: Quiz) -> String {
        let id = Self::new_id();
        self.quizzes
            .write()
            .expect("quizzes lock poisoned")
            .insert(id.clone(), quiz);
        id
    }

    fn delete_quiz(&self, id: &str) -> Result<(), StoreError> {
        self.quizzes
            .write()
            .expect("quizzes lock poisoned")
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                collection: "quizzes",
                id: id.to_string(),
            })
    }

    fn set_quiz_questions(&self, id: &str, questions: Vec<Question>) -> Result<(), StoreError> {
        let mut quizzes = self.quizzes.write().expect("quizzes lock poisoned");
        let quiz = quizzes.get_mut(id).ok_or_else(|| StoreError::NotFound {
            collection: "quizzes",
            id: id.to_string(),
        })?;

        quiz.questions = questions;
        quiz.status = "ready".to_string();
        quiz.questions_generated = true;
        Ok(())
    }

    fn list_scores(&self) -> Vec<Document<Score>> {
        self.scores
            .read()
            .expect("scores lock poisoned")
            .iter()
            .map(|(id, score)| Document {
                id: id.clone(),
                data: score.clone(),
            })
            .collect()
    }

    fn create_score(&self, score: Score) -> String {
        let id = Self::new_id();
        self.scores
            .write()
            .expect("scores lock poisoned")
            .insert(id.clone(), score);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_crud_round_trip() {
        let store = MemoryStore::new();
        let id = store.create_user(User::new("Okello James", "okello@example.ug", "user", "active"));

        assert_eq!(store.list_users().len(), 1);

        store
            .update_user(
                &id,
                UserUpdate {
                    role: Some("admin".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        let users = store.list_users();
        assert_eq!(users[0].data.role, "admin");
        // Untouched fields survive a partial update
        assert_eq!(users[0].data.email, "okello@example.ug");

        store.delete_user(&id).unwrap();
        assert!(store.list_users().is_empty());
    }

    #[test]
    fn missing_documents_report_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.delete_user("nope"),
            Err(StoreError::NotFound { collection: "users", .. })
        ));
        assert!(matches!(
            store.set_quiz_questions("nope", Vec::new()),
            Err(StoreError::NotFound { collection: "quizzes", .. })
        ));
    }

    #[test]
    fn recorded_scores_are_listable() {
        let store = MemoryStore::new();
        assert!(store.list_scores().is_empty());

        let id = store.create_score(Score {
            user_id: "u-1".to_string(),
            quiz_id: "q-1".to_string(),
            score: 17,
            total_questions: 20,
            completed_at: chrono::Utc::now(),
        });

        let scores = store.list_scores();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].id, id);
        assert_eq!(scores[0].data.score, 17);
    }

    #[test]
    fn storing_questions_marks_the_quiz_ready() {
        let store = MemoryStore::new();
        let id = store.create_quiz(Quiz::new("End of term", "Science", "P.7"));

        let questions = crate::services::question_bank::fallback_questions("Science", "P.7");
        store.set_quiz_questions(&id, questions).unwrap();

        let quizzes = store.list_quizzes();
        assert_eq!(quizzes[0].data.status, "ready");
        assert!(quizzes[0].data.questions_generated);
        assert_eq!(quizzes[0].data.questions.len(), 20);
    }
}
