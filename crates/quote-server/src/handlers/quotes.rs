//! Quote collection handlers

use crate::error::ApiError;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use quote_types::{NewQuote, Quote};
use tracing::info;

pub async fn list(State(state): State<AppState>) -> Json<Vec<Quote>> {
    let resolved = state.resolver.resolve().await;
    Json(resolved.quotes.as_slice().to_vec())
}

/// Decodes the body regardless of content type and echoes it back
pub async fn create(State(state): State<AppState>, body: Bytes) -> Result<Json<Quote>, ApiError> {
    let quote = decode_first(&body)?;

    match &state.store {
        Some(store) => {
            store.create(&NewQuote::from(&quote)).await?;
            state.resolver.invalidate();
            info!("Quote sent to remote store: {:?}", quote.text);
        }
        None => info!("No remote store configured, quote not persisted"),
    }

    Ok(Json(quote))
}

/// First JSON value of the body; trailing data is ignored and `null`
/// decodes to an empty quote
fn decode_first(body: &[u8]) -> Result<Quote, ApiError> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<Quote>>()
        .next()
        .ok_or(ApiError::EmptyBody)?
        .map(Option::unwrap_or_default)
        .map_err(ApiError::InvalidJson)
}

pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
