//! HTTP error responses

use crate::storage::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Invalid JSON")]
    EmptyBody,

    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) | ApiError::EmptyBody => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::InvalidJson(e) => warn!("Rejecting request body: {}", e),
            ApiError::EmptyBody => warn!("Rejecting empty request body"),
            ApiError::Store(e) => error!("Remote store call failed: {}", e),
        }

        (status, self.to_string()).into_response()
    }
}
