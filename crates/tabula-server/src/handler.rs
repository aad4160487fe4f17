use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use tabula_protocol::{HealthResponse, TableSnapshot, UpdateBatch};
use tabula_tables::TableService;

use crate::error::ApiError;

/// `GET /api/:table` -- the whole table as an id-keyed JSON object.
pub async fn get_table(
    State(service): State<TableService>,
    Path(table): Path<String>,
) -> Result<Json<TableSnapshot>, ApiError> {
    let snapshot = service.get_all(&table).await?;
    Ok(Json(snapshot))
}

/// `PUT /api/:table` -- merge-upsert an id-keyed batch of partial records.
///
/// The body is decoded here so that malformed JSON is rejected with 400
/// before the table service is involved. The success response has an empty
/// body; the status code carries the outcome.
pub async fn put_table(
    State(service): State<TableService>,
    Path(table): Path<String>,
    body: String,
) -> Result<StatusCode, ApiError> {
    let batch: UpdateBatch =
        serde_json::from_str(&body).map_err(|e| ApiError::MalformedRequest(e.to_string()))?;
    service.update_all(&table, batch).await?;
    Ok(StatusCode::OK)
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
