//! Port for question storage.
//!
//! Adapters return questions ordered by ascending identifier so that
//! pagination windows are stable between requests.

use async_trait::async_trait;

use crate::domain::{CategoryId, NewQuestion, Question, QuestionId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by question repository adapters.
    pub enum QuestionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "question repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "question repository query failed: {message}",
    }
}

/// Port for reading and mutating stored questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Every stored question, ordered by id.
    async fn list_all(&self) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Questions belonging to `category`, ordered by id.
    async fn list_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Persist a new question and return it with its assigned id.
    async fn create(&self, draft: &NewQuestion) -> Result<Question, QuestionRepositoryError>;

    /// Remove a question.
    ///
    /// Returns `false` when no question with `id` exists.
    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError>;
}
