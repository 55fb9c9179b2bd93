//! Order persistence for the order system.
//!
//! This crate provides the storage side of the system:
//! - [`OrderStore`] trait, the contract every backend must satisfy
//! - [`PostgresOrderStore`], the relational backend
//! - [`InMemoryOrderStore`], the in-process backend used for tests and
//!   as the default store when no database is configured
//! - [`PageRequest`], normalized pagination/sort parameters

pub mod error;
pub mod memory;
pub mod page;
pub mod postgres;
pub mod record;
pub mod store;

pub use error::StoreError;
pub use memory::InMemoryOrderStore;
pub use page::PageRequest;
pub use postgres::PostgresOrderStore;
pub use record::OrderRecord;
pub use store::OrderStore;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
