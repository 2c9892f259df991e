//! Port for the read-only category catalogue.

use async_trait::async_trait;

use crate::domain::{Category, CategoryId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by category repository adapters.
    pub enum CategoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "category repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "category repository query failed: {message}",
    }
}

/// Port for category lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category, ordered by id.
    async fn list_all(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    /// Look up one category. `None` when it does not exist.
    async fn find(&self, id: CategoryId) -> Result<Option<Category>, CategoryRepositoryError>;
}
