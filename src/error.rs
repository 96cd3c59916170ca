//! Error types for the subscription store.

use crate::types::SubscriptionId;
use thiserror::Error;

/// Main error type for store operations.
///
/// The in-memory backend only ever produces `SubscriptionNotFound`;
/// the remaining variants cover backends that can actually fail.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to delete subscription with ID {0}")]
    SubscriptionNotFound(SubscriptionId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
