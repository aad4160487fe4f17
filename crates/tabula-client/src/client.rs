use std::time::Duration;

use reqwest::StatusCode;
use tabula_protocol::{table_url, TableSnapshot, UpdateBatch};

use crate::error::{ClientError, ClientResult};

/// Async client for a Tabula server.
///
/// Cheap to clone; clones share the underlying connection pool, and
/// concurrent calls from the same client run with no ordering guarantee
/// between them. Issued requests run to completion or transport failure --
/// there is no cancellation and no automatic retry.
#[derive(Clone, Debug)]
pub struct TableClient {
    base_url: String,
    http: reqwest::Client,
}

impl TableClient {
    /// Connect to `host:port` with default settings (no request timeout;
    /// reqwest's own defaults apply).
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            base_url: format!("http://{host}:{port}"),
            http: reqwest::Client::new(),
        }
    }

    /// Create a builder for custom configuration.
    pub fn builder() -> TableClientBuilder {
        TableClientBuilder::default()
    }

    /// Fetch every record in `table` as an id-keyed snapshot.
    ///
    /// Any non-2xx response degrades to an empty snapshot rather than an
    /// error, so callers cannot distinguish an empty table from a refused
    /// request on this path. The returned future fails only when the
    /// request cannot be sent, the connection drops, or a 2xx body does
    /// not decode.
    pub async fn fetch_all(&self, table: &str) -> ClientResult<TableSnapshot> {
        let url = table_url(&self.base_url, table);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            tracing::debug!(table, %status, "non-success fetch degraded to empty snapshot");
            Ok(TableSnapshot::new())
        }
    }

    /// Merge-upsert `batch` into `table`.
    ///
    /// Completes with the HTTP status code whether or not it indicates
    /// success; callers inspect it themselves. Fails only on a
    /// transport-level error, never on a non-2xx application response.
    pub async fn update_all(&self, table: &str, batch: &UpdateBatch) -> ClientResult<StatusCode> {
        let url = table_url(&self.base_url, table);
        let response = self.http.put(&url).json(batch).send().await?;
        Ok(response.status())
    }
}

/// Builder for [`TableClient`].
#[derive(Clone, Debug, Default)]
pub struct TableClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TableClientBuilder {
    /// Server base URL, e.g. `http://localhost:33141`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Per-request timeout. Unset by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> ClientResult<TableClient> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Config)?;
        Ok(TableClient {
            base_url: self.base_url.unwrap_or_else(|| "http://localhost:33141".into()),
            http,
        })
    }
}
