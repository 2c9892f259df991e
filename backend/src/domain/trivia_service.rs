//! Catalogue browsing, search and authoring.
//!
//! Implements [`TriviaQuery`] and [`TriviaCommand`] on top of the question and
//! category repositories. Pagination and search run in memory over the
//! ordered lists the repositories return.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageNumber};
use tracing::{info, warn};

use crate::domain::ports::{
    CategoryQuestions, CategoryRepository, CreatedQuestion, DeletedQuestion, QuestionListing,
    QuestionRepository, TriviaCommand, TriviaQuery,
};
use crate::domain::storage_errors::{
    category_read_error, question_read_error, question_write_error,
};
use crate::domain::{
    CategoryCatalogue, CategoryId, Error, NewQuestion, QUESTIONS_PER_PAGE, Question, QuestionId,
    SearchTerm,
};

/// Trivia catalogue service implementing the browsing and authoring ports.
#[derive(Clone)]
pub struct TriviaService<Q, C> {
    questions: Arc<Q>,
    categories: Arc<C>,
}

impl<Q, C> TriviaService<Q, C> {
    /// Create a new service with the given repositories.
    pub fn new(questions: Arc<Q>, categories: Arc<C>) -> Self {
        Self {
            questions,
            categories,
        }
    }
}

impl<Q, C> TriviaService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn catalogue(&self) -> Result<CategoryCatalogue, Error> {
        let categories = self
            .categories
            .list_all()
            .await
            .map_err(category_read_error)?;
        Ok(CategoryCatalogue::from_categories(categories))
    }

    async fn all_questions(&self) -> Result<Vec<Question>, Error> {
        self.questions.list_all().await.map_err(question_read_error)
    }
}

fn page_of(page: PageNumber, questions: &[Question]) -> Page<Question> {
    Page::from_slice(page, questions, QUESTIONS_PER_PAGE)
}

#[async_trait]
impl<Q, C> TriviaQuery for TriviaService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn categories(&self) -> Result<CategoryCatalogue, Error> {
        let catalogue = self.catalogue().await?;
        if catalogue.is_empty() {
            warn!("category catalogue is empty");
            return Err(Error::not_found("no categories available"));
        }
        Ok(catalogue)
    }

    async fn list_questions(&self, page: PageNumber) -> Result<QuestionListing, Error> {
        let questions = self.all_questions().await?;
        let page = page_of(page, &questions);
        if page.is_empty() {
            warn!(page = page.number().get(), total = page.total(), "question page is empty");
            return Err(Error::not_found(format!(
                "no questions on page {}",
                page.number().get()
            )));
        }
        let categories = self.catalogue().await?;
        Ok(QuestionListing { page, categories })
    }

    async fn search_questions(
        &self,
        term: &SearchTerm,
        page: PageNumber,
    ) -> Result<Page<Question>, Error> {
        let matches: Vec<Question> = self
            .all_questions()
            .await?
            .into_iter()
            .filter(|question| question.matches(term))
            .collect();
        if matches.is_empty() {
            warn!(term = term.as_str(), "search found nothing");
            return Err(Error::not_found("no questions match the search term"));
        }
        Ok(page_of(page, &matches))
    }

    async fn questions_in_category(
        &self,
        category: CategoryId,
        page: PageNumber,
    ) -> Result<CategoryQuestions, Error> {
        let Some(found) = self
            .categories
            .find(category)
            .await
            .map_err(category_read_error)?
        else {
            warn!(%category, "unknown category requested");
            return Err(Error::invalid_request(format!(
                "category {category} does not exist"
            )));
        };
        let questions = self
            .questions
            .list_by_category(category)
            .await
            .map_err(question_read_error)?;
        Ok(CategoryQuestions {
            page: page_of(page, &questions),
            category: found,
        })
    }
}

#[async_trait]
impl<Q, C> TriviaCommand for TriviaService<Q, C>
where
    Q: QuestionRepository,
    C: CategoryRepository,
{
    async fn create_question(
        &self,
        draft: NewQuestion,
        page: PageNumber,
    ) -> Result<CreatedQuestion, Error> {
        let question = self
            .questions
            .create(&draft)
            .await
            .map_err(question_write_error)?;
        info!(id = %question.id(), "question created");
        let questions = self
            .questions
            .list_all()
            .await
            .map_err(question_write_error)?;
        Ok(CreatedQuestion {
            question,
            page: page_of(page, &questions),
        })
    }

    async fn delete_question(&self, id: QuestionId) -> Result<DeletedQuestion, Error> {
        let removed = self
            .questions
            .delete(id)
            .await
            .map_err(question_write_error)?;
        if !removed {
            warn!(%id, "delete requested for unknown question");
            return Err(Error::not_found(format!("question {id} does not exist")));
        }
        info!(%id, "question deleted");
        let remaining = self
            .questions
            .list_all()
            .await
            .map_err(question_write_error)?
            .len();
        Ok(DeletedQuestion { id, remaining })
    }
}

#[cfg(test)]
#[path = "trivia_service_tests.rs"]
mod tests;
