//! Outbound adapters implementing the domain storage ports.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel
//! - **memory**: process-local store used without a database and in tests
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
