//! Async HTTP client for the Tabula table store.
//!
//! Two operations against a Tabula server: [`TableClient::fetch_all`]
//! pulls a whole table as an id-keyed snapshot, [`TableClient::update_all`]
//! pushes an id-keyed batch of partial records. Both are `async fn`s over a
//! shared connection pool; the returned future is the deferred handle, and
//! callers decide whether to await it in place or spawn it.

pub mod client;
pub mod error;

pub use client::{TableClient, TableClientBuilder};
pub use error::{ClientError, ClientResult};

// Callers inspect update outcomes as status codes; re-export so they don't
// need a direct reqwest dependency.
pub use reqwest::StatusCode;
