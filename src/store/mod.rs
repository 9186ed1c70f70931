//! Document store boundary.
//!
//! The generation core only produces data; persistence belongs to a
//! document database behind this trait. [`MemoryStore`] is the in-process
//! reference implementation used by the server binary and the tests.

pub mod memory;

pub use memory::MemoryStore;

use serde::Serialize;

use crate::error::StoreError;
use crate::models::{Question, Quiz, Score, User};

/// A stored record together with its document id.
#[derive(Debug, Clone, Serialize)]
pub struct Document<T> {
    pub id: String,
    #[serde(flatten)]
    pub data: T,
}

/// Partial update for a user document; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

/// CRUD surface over the users, quizzes and quiz_scores collections.
///
/// Calls are synchronous; implementations are expected to be cheap or to
/// block briefly (the original deployment used a blocking database client).
pub trait DocumentStore: Send + Sync {
    fn list_users(&self) -> Vec<Document<User>>;
    fn create_user(&self, user: User) -> String;
    fn update_user(&self, id: &str, update: UserUpdate) -> Result<(), StoreError>;
    fn delete_user(&self, id: &str) -> Result<(), StoreError>;

    fn list_quizzes(&self) -> Vec<Document<Quiz>>;
    fn create_quiz(&self, quiz: Quiz) -> String;
    fn delete_quiz(&self, id: &str) -> Result<(), StoreError>;
    /// Persist a generated batch on a quiz document and mark it ready.
    fn set_quiz_questions(&self, id: &str, questions: Vec<Question>) -> Result<(), StoreError>;

    fn list_scores(&self) -> Vec<Document<Score>>;
    fn create_score(&self, score: Score) -> String;
}
