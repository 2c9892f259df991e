//! Category endpoints.
//!
//! ```text
//! GET /categories
//! GET /categories/{id}/questions?page=N
//! ```

use actix_web::{HttpRequest, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{CategoryCatalogue, CategoryId, Question};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::schemas::QuestionSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::page_param;

/// Response payload for the category catalogue.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    #[schema(example = true)]
    pub success: bool,
    /// Category labels keyed by id.
    #[schema(value_type = BTreeMap<String, String>)]
    pub categories: CategoryCatalogue,
}

/// Response payload for one category's questions.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    #[schema(example = true)]
    pub success: bool,
    /// Up to ten questions from the requested page.
    #[schema(value_type = Vec<QuestionSchema>)]
    pub questions: Vec<Question>,
    /// Questions in the category across all pages.
    pub total_questions: usize,
    /// Label of the requested category.
    #[schema(example = "Science")]
    pub current_category: String,
}

/// List every category.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Category catalogue", body = CategoriesResponse),
        (status = 404, description = "No categories exist", body = ErrorEnvelope),
        (status = 503, description = "Storage unavailable", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "listCategories"
)]
#[get("/categories")]
pub async fn list_categories(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<CategoriesResponse>> {
    let categories = state.trivia.categories().await?;
    Ok(web::Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// List one page of questions in a category.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i64, Path, description = "Category identifier"),
        ("page" = Option<u64>, Query, description = "1-based page number; invalid values mean page 1")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponse),
        (status = 400, description = "Category does not exist", body = ErrorEnvelope),
        (status = 404, description = "Malformed category id", body = ErrorEnvelope)
    ),
    tags = ["categories"],
    operation_id = "listCategoryQuestions"
)]
#[get("/categories/{id}/questions")]
pub async fn questions_by_category(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    req: HttpRequest,
) -> ApiResult<web::Json<CategoryQuestionsResponse>> {
    let category = CategoryId::new(path.into_inner());
    let result = state
        .trivia
        .questions_in_category(category, page_param(&req))
        .await?;
    let total_questions = result.page.total();
    Ok(web::Json(CategoryQuestionsResponse {
        success: true,
        questions: result.page.into_items(),
        total_questions,
        current_category: result.category.kind().to_owned(),
    }))
}
