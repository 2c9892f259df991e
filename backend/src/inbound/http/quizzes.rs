//! Quiz endpoint.
//!
//! ```text
//! POST /quizzes {"previous_questions": [ids], "quiz_category": {"id", "type"}}
//! ```
//!
//! The server keeps no session: the client sends back every question id it
//! has already shown and receives one it has not, or a bare
//! `{"success": true}` when the pool is exhausted.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Question, QuestionId, QuizCategory, QuizSession};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::QuestionSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, IntegerField, Rejection, parse_integer, require};

const PREVIOUS_QUESTIONS: FieldName = FieldName::new("previous_questions");
const QUIZ_CATEGORY: FieldName = FieldName::new("quiz_category");
const QUIZ_CATEGORY_ID: FieldName = FieldName::new("quiz_category.id");

/// Category selector as posted by the client.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategoryPayload {
    /// Category id; `0` means every category.
    #[schema(value_type = Option<i64>, example = 0)]
    pub id: Option<IntegerField>,
    /// Display label. Informational only.
    #[serde(rename = "type")]
    #[schema(example = "click")]
    pub kind: Option<String>,
}

/// Request body for `POST /quizzes`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequest {
    /// Identifiers already shown in this quiz.
    #[schema(example = json!([1, 4]))]
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategoryPayload>,
}

impl QuizRequest {
    fn into_session(self) -> Result<QuizSession, crate::domain::Error> {
        let previous = require(self.previous_questions, PREVIOUS_QUESTIONS, Rejection::BadRequest)?;
        let category = require(self.quiz_category, QUIZ_CATEGORY, Rejection::BadRequest)?;
        let id: i64 = parse_integer(
            require(category.id, QUIZ_CATEGORY_ID, Rejection::BadRequest)?,
            QUIZ_CATEGORY_ID,
            Rejection::BadRequest,
        )?;
        Ok(QuizSession::resume(
            QuizCategory::from_id(id),
            previous.into_iter().map(QuestionId::new),
        ))
    }
}

/// Response payload for the next quiz question.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    #[schema(example = true)]
    pub success: bool,
    /// Absent once every question in the pool has been shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<QuestionSchema>)]
    pub question: Option<Question>,
}

/// Draw a random question the player has not seen.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question, or none when the quiz is over", body = QuizResponse),
        (status = 400, description = "Missing field or unknown category", body = ErrorEnvelope)
    ),
    tags = ["quizzes"],
    operation_id = "nextQuizQuestion"
)]
#[post("/quizzes")]
pub async fn next_question(
    state: web::Data<HttpState>,
    payload: web::Json<QuizRequest>,
) -> ApiResult<web::Json<QuizResponse>> {
    let session = payload.into_inner().into_session()?;
    let question = state.quiz.next_question(&session).await?;
    Ok(web::Json(QuizResponse {
        success: true,
        question,
    }))
}
