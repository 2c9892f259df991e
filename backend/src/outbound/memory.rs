//! In-process question and category store.
//!
//! Used when no database URL is configured and by behaviour tests. Data
//! lives for the lifetime of the process.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, QuestionRepository, QuestionRepositoryError,
};
use crate::domain::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Labels seeded by [`InMemoryTriviaStore::with_default_categories`], in id
/// order starting at 1.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[derive(Debug, Default)]
struct StoreState {
    next_id: i64,
    questions: BTreeMap<QuestionId, Question>,
    categories: BTreeMap<CategoryId, Category>,
}

/// Mutex-guarded store implementing both repository ports.
///
/// # Examples
/// ```
/// use trivia_backend::domain::ports::CategoryRepository;
/// use trivia_backend::outbound::memory::InMemoryTriviaStore;
///
/// let store = InMemoryTriviaStore::with_default_categories();
/// let categories = actix_rt::System::new()
///     .block_on(store.list_all())
///     .expect("in-memory reads succeed");
/// assert_eq!(categories.len(), 6);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryTriviaStore {
    state: Mutex<StoreState>,
}

impl InMemoryTriviaStore {
    /// Empty store with no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the standard six categories.
    pub fn with_default_categories() -> Self {
        Self::with_categories(
            DEFAULT_CATEGORIES
                .iter()
                .zip(1..)
                .map(|(label, id)| Category::new(CategoryId::new(id), *label)),
        )
    }

    /// Store seeded with the given categories.
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let state = StoreState {
            next_id: 1,
            questions: BTreeMap::new(),
            categories: categories
                .into_iter()
                .map(|category| (category.id(), category))
                .collect(),
        };
        Self {
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, String> {
        self.state
            .lock()
            .map_err(|_| String::from("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl QuestionRepository for InMemoryTriviaStore {
    async fn list_all(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        let state = self.lock().map_err(QuestionRepositoryError::query)?;
        Ok(state.questions.values().cloned().collect())
    }

    async fn list_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let state = self.lock().map_err(QuestionRepositoryError::query)?;
        Ok(state
            .questions
            .values()
            .filter(|question| question.category() == Some(category))
            .cloned()
            .collect())
    }

    async fn create(&self, draft: &NewQuestion) -> Result<Question, QuestionRepositoryError> {
        let mut state = self.lock().map_err(QuestionRepositoryError::query)?;
        if !state.categories.contains_key(&draft.category()) {
            return Err(QuestionRepositoryError::query(
                "referenced category does not exist",
            ));
        }
        let id = QuestionId::new(state.next_id.max(1));
        state.next_id = id.get() + 1;
        let question = Question::from_draft(id, draft.clone());
        state.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        let mut state = self.lock().map_err(QuestionRepositoryError::query)?;
        Ok(state.questions.remove(&id).is_some())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryTriviaStore {
    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let state = self.lock().map_err(CategoryRepositoryError::query)?;
        Ok(state.categories.values().cloned().collect())
    }

    async fn find(&self, id: CategoryId) -> Result<Option<Category>, CategoryRepositoryError> {
        let state = self.lock().map_err(CategoryRepositoryError::query)?;
        Ok(state.categories.get(&id).cloned())
    }
}
