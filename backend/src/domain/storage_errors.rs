//! Translation of repository failures into domain errors.
//!
//! Reads distinguish an unreachable store (`ServiceUnavailable`) from a
//! failing query (`InternalError`). Every create/delete failure is
//! reported as `Unprocessable`.

use tracing::debug;

use super::Error;
use super::ports::{CategoryRepositoryError, QuestionRepositoryError};

pub(crate) fn question_read_error(error: QuestionRepositoryError) -> Error {
    debug!(%error, "question read failed");
    match error {
        QuestionRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("question repository unavailable: {message}"))
        }
        QuestionRepositoryError::Query { message } => {
            Error::internal(format!("question repository error: {message}"))
        }
    }
}

pub(crate) fn question_write_error(error: QuestionRepositoryError) -> Error {
    debug!(%error, "question write failed");
    Error::unprocessable(format!("question could not be stored: {error}"))
}

pub(crate) fn category_read_error(error: CategoryRepositoryError) -> Error {
    debug!(%error, "category read failed");
    match error {
        CategoryRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("category repository unavailable: {message}"))
        }
        CategoryRepositoryError::Query { message } => {
            Error::internal(format!("category repository error: {message}"))
        }
    }
}
