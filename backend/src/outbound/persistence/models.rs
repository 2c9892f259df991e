//! Diesel row types. Internal to the persistence adapter.

use diesel::prelude::*;

use crate::domain::{Category, CategoryId, Difficulty, NewQuestion, Question, QuestionId};

use super::schema::{categories, questions};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: i64,
    pub kind: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category::new(CategoryId::new(row.id), row.kind)
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct QuestionRow {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question::new(
            QuestionId::new(row.id),
            row.question,
            row.answer,
            row.category.map(CategoryId::new),
            Difficulty::new(row.difficulty),
        )
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = questions)]
pub(crate) struct NewQuestionRow<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub category: Option<i64>,
    pub difficulty: i32,
}

impl<'a> From<&'a NewQuestion> for NewQuestionRow<'a> {
    fn from(draft: &'a NewQuestion) -> Self {
        Self {
            question: draft.question(),
            answer: draft.answer(),
            category: Some(draft.category().get()),
            difficulty: draft.difficulty().get(),
        }
    }
}
