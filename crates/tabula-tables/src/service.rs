use std::sync::Arc;

use serde_json::Value;
use tabula_protocol::{Record, TableSnapshot, UpdateBatch, PROTECTED_ID_FIELDS};
use tabula_store::DocumentStore;

use crate::error::{TableError, TableResult};

/// Bulk table operations over a pluggable document store.
///
/// Cheap to clone; the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct TableService {
    store: Arc<dyn DocumentStore>,
}

impl TableService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Read every record in `table`, keyed by each document's own `id`
    /// field.
    ///
    /// Documents with a missing or non-string `id` are keyed under `""`;
    /// when several collapse there, the last one read wins. An unknown
    /// table yields an empty snapshot.
    pub async fn get_all(&self, table: &str) -> TableResult<TableSnapshot> {
        let documents =
            self.store
                .find_all(table)
                .await
                .map_err(|source| TableError::FetchFailed {
                    table: table.to_string(),
                    source,
                })?;

        let mut snapshot = TableSnapshot::with_capacity(documents.len());
        for document in documents {
            let id = document
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            snapshot.insert(id, document);
        }
        tracing::debug!(table, records = snapshot.len(), "assembled snapshot");
        Ok(snapshot)
    }

    /// Merge-upsert every (id, partial record) pair in `batch` into
    /// `table`.
    ///
    /// Identity fields (`id`, `_id`) are stripped from each partial record
    /// before it is forwarded; identity is immutable past creation. Pairs
    /// are processed independently, but the first adapter failure aborts
    /// the batch: earlier pairs stay committed, later ones are never sent.
    pub async fn update_all(&self, table: &str, batch: UpdateBatch) -> TableResult<()> {
        for (id, fields) in batch {
            let cleaned = strip_identity(fields);
            self.store
                .upsert(table, &id, cleaned)
                .await
                .map_err(|source| TableError::UpdateFailed {
                    table: table.to_string(),
                    id: id.clone(),
                    source,
                })?;
            tracing::trace!(table, id = %id, "record upserted");
        }
        Ok(())
    }
}

impl std::fmt::Debug for TableService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableService").finish_non_exhaustive()
    }
}

fn strip_identity(mut fields: Record) -> Record {
    for key in PROTECTED_ID_FIELDS {
        fields.remove(key);
    }
    fields
}
