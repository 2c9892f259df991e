//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every trivia endpoint and health probe together
//! with the schema wrappers from `inbound::http::schemas`. The document is
//! served by Swagger UI in debug builds and printed by
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::categories::{CategoriesResponse, CategoryQuestionsResponse};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::questions::{
    CreatedResponse, DeletedResponse, QuestionListResponse, QuestionsPostRequest, SearchResponse,
};
use crate::inbound::http::quizzes::{QuizCategoryPayload, QuizRequest, QuizResponse};
use crate::inbound::http::schemas::{CategorySchema, QuestionSchema};
use utoipa::OpenApi;

/// OpenAPI document for the trivia API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia backend API",
        description = "Question bank, category browsing, search, and quiz play."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::questions_by_category,
        crate::inbound::http::questions::list_questions,
        crate::inbound::http::questions::create_or_search,
        crate::inbound::http::questions::delete_question,
        crate::inbound::http::quizzes::next_question,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        QuestionSchema,
        CategorySchema,
        ErrorEnvelope,
        CategoriesResponse,
        CategoryQuestionsResponse,
        QuestionListResponse,
        QuestionsPostRequest,
        SearchResponse,
        CreatedResponse,
        DeletedResponse,
        QuizCategoryPayload,
        QuizRequest,
        QuizResponse,
    )),
    tags(
        (name = "categories", description = "Category catalogue and browsing"),
        (name = "questions", description = "Question listing, search, creation, and removal"),
        (name = "quizzes", description = "Quiz play"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Registration checks for the generated document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const QUESTION_SCHEMA_NAME: &str = "crate.domain.Question";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/categories")]
    #[case("/categories/{id}/questions")]
    #[case("/questions")]
    #[case("/questions/{id}")]
    #[case("/quizzes")]
    #[case("/health/ready")]
    fn document_lists_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn question_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let question = schemas.get(QUESTION_SCHEMA_NAME).expect("Question schema");

        assert_object_schema_has_field(question, "question");
        assert_object_schema_has_field(question, "difficulty");
    }

    #[rstest]
    fn error_envelope_exposes_trace_id() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let envelope = schemas.get("ErrorEnvelope").expect("ErrorEnvelope schema");

        assert_object_schema_has_field(envelope, "traceId");
        assert_object_schema_has_field(envelope, "message");
    }
}
