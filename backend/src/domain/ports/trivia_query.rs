//! Driving port for browsing and searching questions.

use async_trait::async_trait;
use pagination::{Page, PageNumber};

use crate::domain::{Category, CategoryCatalogue, CategoryId, Error, Question, SearchTerm};

/// One page of the full question list plus the category catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionListing {
    pub page: Page<Question>,
    pub categories: CategoryCatalogue,
}

/// One page of a single category's questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuestions {
    pub page: Page<Question>,
    pub category: Category,
}

/// Read-side use cases for the trivia catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaQuery: Send + Sync {
    /// The full category catalogue. Fails with `NotFound` when empty.
    async fn categories(&self) -> Result<CategoryCatalogue, Error>;

    /// Page `page` of all questions. Fails with `NotFound` when the page is
    /// empty.
    async fn list_questions(&self, page: PageNumber) -> Result<QuestionListing, Error>;

    /// Page `page` of questions whose text contains `term`. Fails with
    /// `NotFound` when nothing matches.
    async fn search_questions(
        &self,
        term: &SearchTerm,
        page: PageNumber,
    ) -> Result<Page<Question>, Error>;

    /// Page `page` of questions in `category`. Fails with `InvalidRequest`
    /// when the category does not exist.
    async fn questions_in_category(
        &self,
        category: CategoryId,
        page: PageNumber,
    ) -> Result<CategoryQuestions, Error>;
}
