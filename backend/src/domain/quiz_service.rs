//! Quiz play: pick the next unseen question.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{CategoryRepository, QuestionRepository, QuizQuery};
use crate::domain::storage_errors::{category_read_error, question_read_error};
use crate::domain::{Error, Question, QuizCategory, QuizSession, select_next};

/// Quiz service implementing [`QuizQuery`].
#[derive(Clone)]
pub struct QuizService<Q, C> {
    questions: Arc<Q>,
    categories: Arc<C>,
}

impl<Q, C> QuizService<Q, C> {
    /// Create a new service with the given repositories.
    pub fn new(questions: Arc<Q>, categories: Arc<C>) -> Self {
        Self {
            questions,
            categories,
        }
    }
}

impl<Q, C> QuizService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn candidate_pool(&self, category: QuizCategory) -> Result<Vec<Question>, Error> {
        match category {
            QuizCategory::All => self.questions.list_all().await.map_err(question_read_error),
            QuizCategory::Only(id) => {
                let exists = self
                    .categories
                    .find(id)
                    .await
                    .map_err(category_read_error)?
                    .is_some();
                if !exists {
                    warn!(category = %id, "quiz requested for unknown category");
                    return Err(Error::invalid_request(format!(
                        "category {id} does not exist"
                    )));
                }
                self.questions
                    .list_by_category(id)
                    .await
                    .map_err(question_read_error)
            }
        }
    }
}

#[async_trait]
impl<Q, C> QuizQuery for QuizService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn next_question(&self, session: &QuizSession) -> Result<Option<Question>, Error> {
        let pool = self.candidate_pool(session.category()).await?;
        let next = select_next(&pool, session.seen()).question().cloned();
        debug!(
            pool = pool.len(),
            seen = session.seen().len(),
            exhausted = next.is_none(),
            "quiz selection"
        );
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockCategoryRepository, MockQuestionRepository};
    use crate::domain::{Category, CategoryId, Difficulty, ErrorCode, QuestionId};

    fn question(id: i64, category: i64) -> Question {
        Question::new(
            QuestionId::new(id),
            format!("Question {id}?"),
            "answer",
            Some(CategoryId::new(category)),
            Difficulty::new(2),
        )
    }

    fn make_service(
        questions: MockQuestionRepository,
        categories: MockCategoryRepository,
    ) -> QuizService<MockQuestionRepository, MockCategoryRepository> {
        QuizService::new(Arc::new(questions), Arc::new(categories))
    }

    #[tokio::test]
    async fn all_categories_draws_from_every_question() {
        let mut questions = MockQuestionRepository::new();
        questions
            .expect_list_all()
            .times(1)
            .return_once(|| Ok(vec![question(1, 1), question(2, 3)]));
        questions.expect_list_by_category().times(0);
        let mut categories = MockCategoryRepository::new();
        categories.expect_find().times(0);
        let service = make_service(questions, categories);
        let session = QuizSession::resume(QuizCategory::All, [QuestionId::new(1)]);

        let next = service.next_question(&session).await.expect("selection");

        assert_eq!(next.map(|q| q.id()), Some(QuestionId::new(2)));
    }

    #[tokio::test]
    async fn category_quiz_draws_within_category() {
        let mut categories = MockCategoryRepository::new();
        categories
            .expect_find()
            .times(1)
            .return_once(|id| Ok(Some(Category::new(id, "History"))));
        let mut questions = MockQuestionRepository::new();
        questions
            .expect_list_by_category()
            .withf(|id| *id == CategoryId::new(4))
            .times(1)
            .return_once(|_| Ok(vec![question(5, 4), question(9, 4)]));
        let service = make_service(questions, categories);
        let session = QuizSession::new(QuizCategory::Only(CategoryId::new(4)));

        let next = service
            .next_question(&session)
            .await
            .expect("selection")
            .expect("candidates remain");

        assert_eq!(next.category(), Some(CategoryId::new(4)));
    }

    #[tokio::test]
    async fn seen_pool_ends_the_quiz() {
        let mut questions = MockQuestionRepository::new();
        questions
            .expect_list_all()
            .times(1)
            .return_once(|| Ok(vec![question(1, 1), question(2, 1)]));
        let service = make_service(questions, MockCategoryRepository::new());
        let session =
            QuizSession::resume(QuizCategory::All, [QuestionId::new(1), QuestionId::new(2)]);

        let next = service.next_question(&session).await.expect("selection");

        assert!(next.is_none());
    }

    #[tokio::test]
    async fn unknown_category_is_bad_request() {
        let mut categories = MockCategoryRepository::new();
        categories.expect_find().times(1).return_once(|_| Ok(None));
        let mut questions = MockQuestionRepository::new();
        questions.expect_list_by_category().times(0);
        let service = make_service(questions, categories);
        let session = QuizSession::new(QuizCategory::Only(CategoryId::new(9999)));

        let error = service
            .next_question(&session)
            .await
            .expect_err("unknown category");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }
}
