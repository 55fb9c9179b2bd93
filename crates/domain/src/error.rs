//! Domain error types.

use order_store::StoreError;
use thiserror::Error;

use crate::order::OrderError;

/// Errors that can occur during domain operations.
///
/// The two taxonomy kinds are kept distinct so protocol adapters can map a
/// validation failure to a client error and a storage failure to a server
/// error without inspecting messages.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed entity construction.
    #[error("validation error: {0}")]
    Validation(#[from] OrderError),

    /// A failure in the order store.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),

    /// Failed to serialize an event payload.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
