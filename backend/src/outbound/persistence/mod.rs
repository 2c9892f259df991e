//! PostgreSQL persistence adapters using Diesel.
//!
//! Repository implementations translate between Diesel rows and domain
//! types and nothing else. Row structs and table definitions stay private
//! to this module. Connections come from a `bb8` pool via `diesel-async`.

mod diesel_category_repository;
mod diesel_question_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_category_repository::DieselCategoryRepository;
pub use diesel_question_repository::DieselQuestionRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
