use async_trait::async_trait;

use crate::{OrderRecord, PageRequest, Result};

/// Core trait for order storage backends.
///
/// Orders are written once and never updated or deleted. All implementations
/// must be thread-safe (`Send + Sync`); the backend owns and synchronizes its
/// own connections.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a new order.
    ///
    /// Must be called at most once per order; persisting an identifier that
    /// already exists fails with [`StoreError::DuplicateId`](crate::StoreError::DuplicateId).
    async fn save(&self, record: &OrderRecord) -> Result<()>;

    /// Returns the page of orders selected by `page`, sorted ascending by its
    /// sort field.
    ///
    /// May return an empty vector; never fails because of an out-of-range
    /// page. The sort field is caller-controlled — implementations that
    /// interpolate it into a query must resolve it against a fixed column
    /// set rather than trusting the raw value.
    async fn find_all(&self, page: &PageRequest) -> Result<Vec<OrderRecord>>;

    /// Returns the total number of stored orders, independent of pagination.
    async fn get_total(&self) -> Result<u64>;
}
