//! Question endpoints.
//!
//! ```text
//! GET    /questions?page=N
//! POST   /questions?page=N      create, or search when `searchTerm` is set
//! DELETE /questions/{id}
//! ```

use actix_web::{HttpRequest, HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    CategoryCatalogue, CategoryId, Difficulty, Error, NewQuestion, Question, QuestionId,
    SearchTerm,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::QuestionSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, IntegerField, Rejection, page_param, parse_integer, question_validation_error,
    require,
};

const QUESTION: FieldName = FieldName::new("question");
const ANSWER: FieldName = FieldName::new("answer");
const CATEGORY: FieldName = FieldName::new("category");
const DIFFICULTY: FieldName = FieldName::new("difficulty");

/// Request body for `POST /questions`.
///
/// A non-blank `searchTerm` turns the request into a search and every other
/// field is ignored. Otherwise all four question fields are required.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuestionsPostRequest {
    #[serde(rename = "searchTerm")]
    #[schema(example = "title")]
    pub search_term: Option<String>,
    #[schema(example = "Which planet is largest?")]
    pub question: Option<String>,
    #[schema(example = "Jupiter")]
    pub answer: Option<String>,
    #[schema(value_type = Option<i64>, example = 1)]
    pub category: Option<IntegerField>,
    #[schema(value_type = Option<i32>, example = 2)]
    pub difficulty: Option<IntegerField>,
}

impl QuestionsPostRequest {
    fn into_draft(self) -> Result<NewQuestion, Error> {
        let question = require(self.question, QUESTION, Rejection::Unprocessable)?;
        let answer = require(self.answer, ANSWER, Rejection::Unprocessable)?;
        let category: i64 = parse_integer(
            require(self.category, CATEGORY, Rejection::Unprocessable)?,
            CATEGORY,
            Rejection::Unprocessable,
        )?;
        let difficulty: i32 = parse_integer(
            require(self.difficulty, DIFFICULTY, Rejection::Unprocessable)?,
            DIFFICULTY,
            Rejection::Unprocessable,
        )?;
        NewQuestion::new(
            question,
            answer,
            CategoryId::new(category),
            Difficulty::new(difficulty),
        )
        .map_err(question_validation_error)
    }
}

/// Response payload for the paginated question list.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionListResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(value_type = Vec<QuestionSchema>)]
    pub questions: Vec<Question>,
    /// Questions across all pages.
    pub total_questions: usize,
    #[schema(value_type = BTreeMap<String, String>)]
    pub categories: CategoryCatalogue,
    /// Always `null` for the unfiltered list.
    pub current_category: Option<String>,
}

/// Response payload for a search.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    #[schema(example = true)]
    pub success: bool,
    #[schema(value_type = Vec<QuestionSchema>)]
    pub questions: Vec<Question>,
    /// Number of matching questions across all pages.
    pub total_questions: usize,
    pub current_category: Option<String>,
}

/// Response payload after creating a question.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = true)]
    pub success: bool,
    /// Identifier of the new question.
    #[schema(example = 24)]
    pub created: i64,
    /// Requested page of the updated list.
    #[schema(value_type = Vec<QuestionSchema>)]
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Response payload after deleting a question.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    #[schema(example = true)]
    pub success: bool,
    /// Identifier of the removed question.
    #[schema(example = 5)]
    pub deleted: i64,
    /// Questions left.
    pub total_questions: usize,
}

/// List one page of all questions with the category catalogue.
#[utoipa::path(
    get,
    path = "/questions",
    params(
        ("page" = Option<u64>, Query, description = "1-based page number; invalid values mean page 1")
    ),
    responses(
        (status = 200, description = "Question page", body = QuestionListResponse),
        (status = 404, description = "Requested page is empty", body = ErrorEnvelope),
        (status = 503, description = "Storage unavailable", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "listQuestions"
)]
#[get("/questions")]
pub async fn list_questions(
    state: web::Data<HttpState>,
    req: HttpRequest,
) -> ApiResult<web::Json<QuestionListResponse>> {
    let listing = state.trivia.list_questions(page_param(&req)).await?;
    let total_questions = listing.page.total();
    Ok(web::Json(QuestionListResponse {
        success: true,
        questions: listing.page.into_items(),
        total_questions,
        categories: listing.categories,
        current_category: None,
    }))
}

/// Create a question, or search when `searchTerm` is supplied.
#[utoipa::path(
    post,
    path = "/questions",
    request_body = QuestionsPostRequest,
    params(
        ("page" = Option<u64>, Query, description = "Page of the result list to return")
    ),
    responses(
        (
            status = 200,
            description = "Question created; a search answers with SearchResponse instead",
            body = CreatedResponse
        ),
        (status = 400, description = "Malformed JSON body", body = ErrorEnvelope),
        (status = 404, description = "Search matched nothing", body = ErrorEnvelope),
        (status = 422, description = "Missing field or storage failure", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "createOrSearchQuestions"
)]
#[post("/questions")]
pub async fn create_or_search(
    state: web::Data<HttpState>,
    req: HttpRequest,
    payload: web::Json<QuestionsPostRequest>,
) -> ApiResult<HttpResponse> {
    let page = page_param(&req);
    let mut body = payload.into_inner();
    if let Some(term) = body.search_term.take().and_then(SearchTerm::new) {
        let found = state.trivia.search_questions(&term, page).await?;
        let total_questions = found.total();
        return Ok(HttpResponse::Ok().json(SearchResponse {
            success: true,
            questions: found.into_items(),
            total_questions,
            current_category: None,
        }));
    }

    let draft = body.into_draft()?;
    let created = state.trivia_commands.create_question(draft, page).await?;
    let total_questions = created.page.total();
    Ok(HttpResponse::Ok().json(CreatedResponse {
        success: true,
        created: created.question.id().get(),
        questions: created.page.into_items(),
        total_questions,
    }))
}

/// Delete a question.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(("id" = i64, Path, description = "Question identifier")),
    responses(
        (status = 200, description = "Question deleted", body = DeletedResponse),
        (status = 404, description = "Question does not exist", body = ErrorEnvelope),
        (status = 422, description = "Storage failure", body = ErrorEnvelope)
    ),
    tags = ["questions"],
    operation_id = "deleteQuestion"
)]
#[delete("/questions/{id}")]
pub async fn delete_question(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<DeletedResponse>> {
    let id = QuestionId::new(path.into_inner());
    let deleted = state.trivia_commands.delete_question(id).await?;
    Ok(web::Json(DeletedResponse {
        success: true,
        deleted: deleted.id.get(),
        total_questions: deleted.remaining,
    }))
}

#[cfg(test)]
#[path = "questions_tests.rs"]
mod tests;
