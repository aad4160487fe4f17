use tokio::net::TcpListener;

use tabula_tables::TableService;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// Tabula table store server.
pub struct TabulaServer {
    config: ServerConfig,
    service: TableService,
}

impl TabulaServer {
    pub fn new(config: ServerConfig, service: TableService) -> Self {
        Self { config, service }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.service.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = build_router(self.service);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("tabula server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use tabula_store::MemoryStore;

    fn service() -> TableService {
        TableService::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn server_construction() {
        let server = TabulaServer::new(ServerConfig::default(), service());
        assert_eq!(
            server.config().bind_addr,
            "127.0.0.1:33141".parse().unwrap()
        );
    }

    #[test]
    fn router_builds() {
        let server = TabulaServer::new(ServerConfig::default(), service());
        let _router = server.router();
    }
}
