//! HTTP handlers

pub mod health;
pub mod quote;
pub mod quotes;

pub use health::health;

use axum::http::StatusCode;

/// CORS preflight: headers come from the route layer, body stays empty
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
