//! PostgreSQL-backed `QuestionRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{QuestionRepository, QuestionRepositoryError};
use crate::domain::{CategoryId, NewQuestion, Question, QuestionId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewQuestionRow, QuestionRow};
use super::pool::{DbPool, PoolError};
use super::schema::questions;

/// Diesel implementation of [`QuestionRepository`].
#[derive(Clone)]
pub struct DieselQuestionRepository {
    pool: DbPool,
}

impl DieselQuestionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> QuestionRepositoryError {
    map_pool_error(error, QuestionRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> QuestionRepositoryError {
    map_diesel_error(
        error,
        QuestionRepositoryError::query,
        QuestionRepositoryError::connection,
    )
}

#[async_trait]
impl QuestionRepository for DieselQuestionRepository {
    async fn list_all(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = questions::table
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn list_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = questions::table
            .filter(questions::category.eq(category.get()))
            .order(questions::id.asc())
            .select(QuestionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn create(&self, draft: &NewQuestion) -> Result<Question, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = diesel::insert_into(questions::table)
            .values(NewQuestionRow::from(draft))
            .returning(QuestionRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(Question::from(row))
    }

    async fn delete(&self, id: QuestionId) -> Result<bool, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let removed = diesel::delete(questions::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(removed > 0)
    }
}
