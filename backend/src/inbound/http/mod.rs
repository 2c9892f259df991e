//! HTTP inbound adapter exposing the trivia REST endpoints.

pub mod categories;
pub mod error;
pub mod health;
pub mod questions;
pub mod quizzes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub(crate) mod validation;

use actix_web::{HttpResponse, web};

use crate::domain::Error;

pub use error::ApiResult;

/// Register the trivia routes and extractor error handlers.
///
/// Malformed JSON bodies answer `400`; path segments that do not parse as an
/// id answer `404`, matching a route that does not exist.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        Error::invalid_request(format!("malformed JSON body: {err}")).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        Error::not_found(format!("no resource at this path: {err}")).into()
    }))
    .service(categories::list_categories)
    .service(categories::questions_by_category)
    .service(questions::list_questions)
    .service(questions::create_or_search)
    .service(questions::delete_question)
    .service(quizzes::next_question);
}

/// Fallback for unmatched routes so they share the JSON error envelope.
pub async fn unknown_route() -> ApiResult<HttpResponse> {
    Err(Error::not_found("no route matches the request"))
}
