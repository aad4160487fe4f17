use async_trait::async_trait;
use tabula_protocol::Record;

use crate::error::StoreResult;

/// Backend interface for a table-oriented document store.
///
/// All implementations must satisfy these invariants:
/// - `find_all` on an unknown table returns an empty sequence, never an
///   error. Only connectivity failures are errors.
/// - `upsert` is create-or-merge: an absent (table, id) is created with the
///   given fields plus the id; a present one has each given field set and
///   every other field left untouched.
/// - Upserts to different ids never interfere; upserts to the same id race
///   with last-write-wins at field granularity.
/// - Backend failures are propagated, never silently ignored.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read every raw stored document in `table`.
    ///
    /// Returns an empty vec if the table has no records (table-not-found is
    /// not an error). Fails with [`StoreError::Unavailable`] when the
    /// backend cannot be reached.
    ///
    /// [`StoreError::Unavailable`]: crate::StoreError::Unavailable
    async fn find_all(&self, table: &str) -> StoreResult<Vec<Record>>;

    /// Create-or-merge the document addressed by (`table`, `id`).
    ///
    /// Fails with [`StoreError::Unavailable`] on connectivity failure and
    /// [`StoreError::Rejected`] on malformed data.
    ///
    /// [`StoreError::Unavailable`]: crate::StoreError::Unavailable
    /// [`StoreError::Rejected`]: crate::StoreError::Rejected
    async fn upsert(&self, table: &str, id: &str, fields: Record) -> StoreResult<()>;

    /// Delete the document addressed by (`table`, `id`). Returns `true` if
    /// the document existed.
    ///
    /// Not exercised by the bulk get/upsert contract; exposed for
    /// housekeeping by embedding applications.
    async fn remove(&self, table: &str, id: &str) -> StoreResult<bool>;
}
