//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`; these
//! wrappers mirror their serialised shape for the generated document.

use serde::Serialize;
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Question`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Question)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct QuestionSchema {
    /// Storage-assigned identifier.
    #[schema(example = 5)]
    id: i64,
    /// Question text.
    #[schema(example = "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?")]
    question: String,
    /// Answer text.
    #[schema(example = "Maya Angelou")]
    answer: String,
    /// Owning category id.
    #[schema(example = 4)]
    category: Option<i64>,
    /// Difficulty rating; larger is harder.
    #[schema(example = 2)]
    difficulty: i32,
}

/// OpenAPI schema for [`crate::domain::Category`].
#[derive(Serialize, ToSchema)]
#[schema(as = crate::domain::Category)]
pub struct CategorySchema {
    /// Category identifier; `0` selects every category in a quiz.
    #[schema(example = 1)]
    id: i64,
    /// Display label.
    #[serde(rename = "type")]
    #[schema(example = "Science")]
    kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn question_schema_lists_client_fields() {
        let schema_json = schema_to_json::<QuestionSchema>();
        for field in ["id", "question", "answer", "category", "difficulty"] {
            assert!(schema_json.contains(field), "schema should contain {field}");
        }
    }

    #[test]
    fn category_schema_uses_type_label() {
        let schema_json = schema_to_json::<CategorySchema>();
        assert!(schema_json.contains("\"type\""), "schema should expose type");
        assert!(!schema_json.contains("kind"), "schema should hide the Rust name");
    }
}
