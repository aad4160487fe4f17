use thiserror::Error;

/// Errors from document store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store cannot be reached (connectivity failure).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store refused the data (malformed document, invalid id).
    #[error("store rejected write: {0}")]
    Rejected(String),

    /// A stored document could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
