//! Table service for Tabula.
//!
//! Sits between the transport endpoint and the document store adapter:
//! bulk reads reassemble a table as an id-keyed snapshot, bulk writes are
//! translated into per-record merge-upserts with the identity fields
//! stripped first.

pub mod error;
pub mod service;

pub use error::{TableError, TableResult};
pub use service::TableService;
