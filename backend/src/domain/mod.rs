//! Domain entities, services and ports.
//!
//! The selector ([`select_next_with`]) and the search predicate
//! ([`Question::matches`]) are pure. Services orchestrate them with the
//! repositories behind the ports in [`ports`].

use pagination::PageSize;

pub mod category;
pub mod error;
pub mod ports;
pub mod question;
pub mod quiz;
pub mod quiz_service;
pub mod search;
mod storage_errors;
pub mod trace_id;
pub mod trivia_service;

pub use self::category::{Category, CategoryCatalogue, CategoryId};
pub use self::error::{Error, ErrorCode};
pub use self::question::{Difficulty, NewQuestion, Question, QuestionId, QuestionValidationError};
pub use self::quiz::{QuizCategory, QuizSession, Selection, select_next, select_next_with};
pub use self::quiz_service::QuizService;
pub use self::search::SearchTerm;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::trivia_service::TriviaService;

/// Number of questions in every paginated response.
pub const QUESTIONS_PER_PAGE: PageSize = match PageSize::new(10) {
    Ok(size) => size,
    Err(_) => panic!("questions per page must be non-zero"),
};
