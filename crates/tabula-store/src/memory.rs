use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;
use tabula_protocol::Record;

use crate::error::StoreResult;
use crate::traits::DocumentStore;

/// In-memory, HashMap-based document store.
///
/// Intended for tests and embedding. Tables and their documents are held in
/// memory behind a `RwLock`; documents are cloned on read. Never returns a
/// store error.
pub struct MemoryStore {
    tables: RwLock<HashMap<String, HashMap<String, Record>>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Number of documents currently stored in `table`.
    pub fn record_count(&self, table: &str) -> usize {
        self.tables
            .read()
            .expect("lock poisoned")
            .get(table)
            .map_or(0, HashMap::len)
    }

    /// Return a sorted list of all table names with at least one document.
    pub fn table_names(&self) -> Vec<String> {
        let map = self.tables.read().expect("lock poisoned");
        let mut names: Vec<String> = map
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// Remove all tables and documents.
    pub fn clear(&self) {
        self.tables.write().expect("lock poisoned").clear();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_all(&self, table: &str) -> StoreResult<Vec<Record>> {
        let map = self.tables.read().expect("lock poisoned");
        Ok(map
            .get(table)
            .map(|records| records.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn upsert(&self, table: &str, id: &str, fields: Record) -> StoreResult<()> {
        let mut map = self.tables.write().expect("lock poisoned");
        let records = map.entry(table.to_string()).or_default();
        match records.get_mut(id) {
            Some(existing) => {
                // Merge: set each given field, leave the rest untouched.
                for (key, value) in fields {
                    existing.insert(key, value);
                }
            }
            None => {
                let mut record = fields;
                // The id travels inside the document so bulk reads can key
                // by it. It wins over any id the caller smuggled in.
                record.insert("id".into(), Value::String(id.to_string()));
                records.insert(id.to_string(), record);
            }
        }
        Ok(())
    }

    async fn remove(&self, table: &str, id: &str) -> StoreResult<bool> {
        let mut map = self.tables.write().expect("lock poisoned");
        Ok(map
            .get_mut(table)
            .is_some_and(|records| records.remove(id).is_some()))
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let table_count = self.tables.read().expect("lock poisoned").len();
        f.debug_struct("MemoryStore")
            .field("table_count", &table_count)
            .finish()
    }
}
