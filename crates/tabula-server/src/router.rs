use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use tabula_protocol::endpoints;
use tabula_tables::TableService;

use crate::handler;

/// Build the axum router for all Tabula endpoints.
pub fn build_router(service: TableService) -> Router {
    Router::new()
        .route(
            endpoints::TABLE,
            get(handler::get_table).put(handler::put_table),
        )
        .route(endpoints::HEALTH, get(handler::health))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
