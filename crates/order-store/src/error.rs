use thiserror::Error;

/// Errors that can occur when interacting with an order store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An order with the same identifier already exists.
    #[error("order {0} already exists")]
    DuplicateId(String),

    /// An error from the underlying database.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The backend is unavailable or refused the operation.
    ///
    /// Used by the in-memory backend's failure injection.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
