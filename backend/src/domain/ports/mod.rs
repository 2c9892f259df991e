//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`TriviaQuery`, `TriviaCommand`, `QuizQuery`) are
//! implemented by domain services and called by inbound adapters. Driven
//! ports (`QuestionRepository`, `CategoryRepository`) are implemented by
//! outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod category_repository;
mod question_repository;
mod quiz_query;
mod trivia_command;
mod trivia_query;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
pub use category_repository::{CategoryRepository, CategoryRepositoryError};
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
pub use question_repository::{QuestionRepository, QuestionRepositoryError};
#[cfg(test)]
pub use quiz_query::MockQuizQuery;
pub use quiz_query::QuizQuery;
#[cfg(test)]
pub use trivia_command::MockTriviaCommand;
pub use trivia_command::{CreatedQuestion, DeletedQuestion, TriviaCommand};
#[cfg(test)]
pub use trivia_query::MockTriviaQuery;
pub use trivia_query::{CategoryQuestions, QuestionListing, TriviaQuery};
