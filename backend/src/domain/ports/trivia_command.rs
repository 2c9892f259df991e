//! Driving port for authoring and removing questions.

use async_trait::async_trait;
use pagination::{Page, PageNumber};

use crate::domain::{Error, NewQuestion, Question, QuestionId};

/// Result of creating a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedQuestion {
    pub question: Question,
    /// The requested page of the updated question list.
    pub page: Page<Question>,
}

/// Result of deleting a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletedQuestion {
    pub id: QuestionId,
    /// Questions left after the deletion.
    pub remaining: usize,
}

/// Write-side use cases for the trivia catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaCommand: Send + Sync {
    /// Store `draft`. Storage failures surface as `Unprocessable`.
    async fn create_question(
        &self,
        draft: NewQuestion,
        page: PageNumber,
    ) -> Result<CreatedQuestion, Error>;

    /// Delete a question. Unknown ids surface as `NotFound`.
    async fn delete_question(&self, id: QuestionId) -> Result<DeletedQuestion, Error>;
}
