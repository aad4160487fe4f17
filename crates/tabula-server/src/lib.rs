//! HTTP server for the Tabula table store.
//!
//! Exposes schema-less tables over HTTP: `GET /api/:table` returns the
//! whole table as an id-keyed JSON object, `PUT /api/:table` merge-upserts
//! an id-keyed batch of partial records. Storage is whatever
//! [`DocumentStore`](tabula_store::DocumentStore) backend the service is
//! constructed with.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use router::build_router;
pub use server::TabulaServer;
