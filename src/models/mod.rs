pub mod question;
pub mod records;

pub use question::{DraftQuestion, Question};
pub use records::{Quiz, Score, User, UserPreferences};
