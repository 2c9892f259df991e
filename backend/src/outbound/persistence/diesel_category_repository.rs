//! PostgreSQL-backed `CategoryRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CategoryRepository, CategoryRepositoryError};
use crate::domain::{Category, CategoryId};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::CategoryRow;
use super::pool::{DbPool, PoolError};
use super::schema::categories;

/// Diesel implementation of [`CategoryRepository`].
#[derive(Clone)]
pub struct DieselCategoryRepository {
    pool: DbPool,
}

impl DieselCategoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> CategoryRepositoryError {
    map_pool_error(error, CategoryRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> CategoryRepositoryError {
    map_diesel_error(
        error,
        CategoryRepositoryError::query,
        CategoryRepositoryError::connection,
    )
}

#[async_trait]
impl CategoryRepository for DieselCategoryRepository {
    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = categories::table
            .order(categories::id.asc())
            .select(CategoryRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find(&self, id: CategoryId) -> Result<Option<Category>, CategoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = categories::table
            .find(id.get())
            .select(CategoryRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(Category::from))
    }
}
