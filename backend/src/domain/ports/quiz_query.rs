//! Driving port for quiz play.

use async_trait::async_trait;

use crate::domain::{Error, Question, QuizSession};

/// Picks the next unseen question for a quiz.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizQuery: Send + Sync {
    /// Draw a random question the session has not seen.
    ///
    /// `Ok(None)` means the quiz is over. Fails with `InvalidRequest` when
    /// the session names a category that does not exist.
    async fn next_question(&self, session: &QuizSession) -> Result<Option<Question>, Error>;
}
