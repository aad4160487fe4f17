/// HTTP endpoint paths for the Tabula protocol.
pub mod endpoints {
    /// Prefix under which tables are exposed.
    pub const API_PREFIX: &str = "/api";
    /// Axum route pattern binding the table name path parameter.
    pub const TABLE: &str = "/api/:table";
    /// Liveness probe, outside the table namespace so no table name can
    /// shadow it.
    pub const HEALTH: &str = "/v1/health";
}

/// Build the URL for a table on a given server base (e.g.
/// `http://localhost:33141`). A trailing slash on the base is tolerated.
pub fn table_url(base: &str, table: &str) -> String {
    format!(
        "{}{}/{table}",
        base.trim_end_matches('/'),
        endpoints::API_PREFIX
    )
}

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
