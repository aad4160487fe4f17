//! Document store adapter for Tabula.
//!
//! Wraps whatever persistent document database backs the server behind the
//! [`DocumentStore`] trait: find all documents in a table, merge-upsert a
//! single document by id, remove a document. Tables are opaque namespaces;
//! documents are schema-less JSON objects.
//!
//! # Backends
//!
//! - [`MemoryStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. A table that was never written to reads as empty, not as an error.
//! 2. Upsert is create-or-merge: absent documents are created with the id
//!    set, present documents have only the given fields overwritten.
//! 3. Concurrent upserts to different ids are independent; concurrent
//!    upserts to the same id race with last-write-wins per field.
//! 4. The store never interprets field values -- it stores JSON as given.
//! 5. Backend failures are propagated, never silently ignored.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::DocumentStore;
