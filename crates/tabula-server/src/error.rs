use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use tabula_protocol::ErrorBody;
use tabula_store::StoreError;
use tabula_tables::TableError;

/// Errors from running the server itself (not per-request failures).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Per-request failures, mapped to a status code and a JSON error body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed to decode as an update batch. Rejected
    /// before reaching the table service.
    #[error("malformed request body: {0}")]
    MalformedRequest(String),

    #[error(transparent)]
    Table(#[from] TableError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::Table(TableError::FetchFailed { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Table(err @ TableError::UpdateFailed { .. }) => match err.store_cause() {
                StoreError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
                StoreError::Rejected(_) | StoreError::Serialization(_) => StatusCode::BAD_REQUEST,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(%status, error = %self, "request failed");
        // Non-2xx responses always carry a decodable body.
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_request_maps_to_400() {
        let err = ApiError::MalformedRequest("expected an object".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn fetch_failure_maps_to_500() {
        let err = ApiError::Table(TableError::FetchFailed {
            table: "players".into(),
            source: StoreError::Unavailable("down".into()),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn rejected_update_maps_to_400() {
        let err = ApiError::Table(TableError::UpdateFailed {
            table: "players".into(),
            id: "1".into(),
            source: StoreError::Rejected("bad".into()),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unavailable_update_maps_to_500() {
        let err = ApiError::Table(TableError::UpdateFailed {
            table: "players".into(),
            id: "1".into(),
            source: StoreError::Unavailable("down".into()),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
