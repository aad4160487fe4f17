use thiserror::Error;

use tabula_store::StoreError;

/// Errors from table service operations, each wrapping the adapter cause.
#[derive(Debug, Error)]
pub enum TableError {
    /// Bulk read failed; no partial snapshot is returned.
    #[error("fetch from table {table} failed: {source}")]
    FetchFailed {
        table: String,
        #[source]
        source: StoreError,
    },

    /// Bulk update aborted at record `id`; earlier records in the batch may
    /// already be committed.
    #[error("update of record {id} in table {table} failed: {source}")]
    UpdateFailed {
        table: String,
        id: String,
        #[source]
        source: StoreError,
    },
}

impl TableError {
    /// The adapter error that caused this failure.
    pub fn store_cause(&self) -> &StoreError {
        match self {
            Self::FetchFailed { source, .. } | Self::UpdateFailed { source, .. } => source,
        }
    }
}

/// Result alias for table service operations.
pub type TableResult<T> = Result<T, TableError>;
