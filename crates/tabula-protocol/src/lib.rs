//! Wire contract for the Tabula table store.
//!
//! Defines the JSON shapes exchanged between Tabula clients and servers
//! (records, snapshots, update batches) and the HTTP endpoint paths both
//! sides agree on.

pub mod endpoint;
pub mod types;

pub use endpoint::{endpoints, table_url, HealthResponse};
pub use types::{ErrorBody, Record, TableSnapshot, UpdateBatch, PROTECTED_ID_FIELDS};
