//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{QuizQuery, TriviaCommand, TriviaQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub trivia: Arc<dyn TriviaQuery>,
    pub trivia_commands: Arc<dyn TriviaCommand>,
    pub quiz: Arc<dyn QuizQuery>,
}

impl HttpState {
    /// Bundle the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use trivia_backend::domain::{QuizService, TriviaService};
    /// use trivia_backend::inbound::http::state::HttpState;
    /// use trivia_backend::outbound::memory::InMemoryTriviaStore;
    ///
    /// let store = Arc::new(InMemoryTriviaStore::with_default_categories());
    /// let trivia = Arc::new(TriviaService::new(store.clone(), store.clone()));
    /// let quiz = Arc::new(QuizService::new(store.clone(), store));
    /// let state = HttpState::new(trivia.clone(), trivia, quiz);
    /// let _ports = state.trivia.clone();
    /// ```
    pub fn new(
        trivia: Arc<dyn TriviaQuery>,
        trivia_commands: Arc<dyn TriviaCommand>,
        quiz: Arc<dyn QuizQuery>,
    ) -> Self {
        Self {
            trivia,
            trivia_commands,
            quiz,
        }
    }
}
