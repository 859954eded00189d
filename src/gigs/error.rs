use crate::storage::protocol::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// Reserved: parameters are currently coerced, never rejected.
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("gig query failed: {0}")]
    Query(#[from] StoreError),
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = match self {
            SearchError::Validation(_) => StatusCode::BAD_REQUEST,
            SearchError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
