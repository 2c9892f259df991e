//! Builders wiring storage adapters into the HTTP state.

use std::sync::Arc;

use trivia_backend::domain::ports::{CategoryRepository, QuestionRepository};
use trivia_backend::domain::{QuizService, TriviaService};
use trivia_backend::inbound::http::state::HttpState;
use trivia_backend::outbound::memory::InMemoryTriviaStore;
use trivia_backend::outbound::persistence::{
    DbPool, DieselCategoryRepository, DieselQuestionRepository,
};

use super::ServerConfig;

/// Build the HTTP state over Diesel repositories when a pool is configured,
/// otherwise over a fresh in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => diesel_state(pool),
        None => {
            let store = Arc::new(InMemoryTriviaStore::with_default_categories());
            state_over(store.clone(), store)
        }
    }
}

fn diesel_state(pool: &DbPool) -> HttpState {
    state_over(
        Arc::new(DieselQuestionRepository::new(pool.clone())),
        Arc::new(DieselCategoryRepository::new(pool.clone())),
    )
}

fn state_over<Q, C>(questions: Arc<Q>, categories: Arc<C>) -> HttpState
where
    Q: QuestionRepository + 'static,
    C: CategoryRepository + 'static,
{
    let trivia = Arc::new(TriviaService::new(questions.clone(), categories.clone()));
    let quiz = Arc::new(QuizService::new(questions, categories));
    HttpState::new(trivia.clone(), trivia, quiz)
}
